use serde::{Deserialize, Serialize};
use std::fmt;

// Entities are referenced by their index into the owning Vec on
// `SchedulingInput`, never by value.
pub type PeriodId = usize;
pub type SlotId = usize;
pub type SubjectId = usize;
pub type ClassId = usize;
pub type TeacherId = usize;
pub type AssignmentId = usize;

/// The five school days, in week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn short(self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short())
    }
}

/// Teaching priority of a period. `Mandatory` periods must have a lesson in
/// every class; the middle levels only bias the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    None,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
    Mandatory,
}

/// Weight level of a soft-preference parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoftWeight {
    None,
    Low,
    #[default]
    Medium,
    High,
}

impl SoftWeight {
    /// Objective factor for this level, or `None` if the preference is off.
    pub fn factor(self) -> Option<f64> {
        match self {
            SoftWeight::None => None,
            SoftWeight::Low => Some(1.0),
            SoftWeight::Medium => Some(2.0),
            SoftWeight::High => Some(4.0),
        }
    }
}

/// A period of the school day, shared by all weekdays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// 1-based position in the day.
    pub number: u32,
    #[serde(default)]
    pub begin: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// True if this period and the next one on the same day form a
    /// double-period pair.
    #[serde(default)]
    pub double_period_start: bool,
    /// Weekdays on which this period is blacklisted for teaching.
    #[serde(default)]
    pub locked_on: Vec<Weekday>,
}

/// One (period, weekday) cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub period: PeriodId,
    pub weekday: Weekday,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    /// Pedagogically demanding subjects are subject to anti-clustering rules.
    #[serde(default)]
    pub demanding: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    pub name: String,
}

/// Availability of a teacher at one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    Normal,
    Restricted,
    Unavailable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    pub slot: SlotId,
    pub level: Availability,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<SubjectId>,
    /// Sparse availability; slots without an entry are `Normal`.
    #[serde(default)]
    pub availability: Vec<AvailabilityEntry>,
}

/// A single class/subject/teacher assignment with a weekly hour count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub subject: SubjectId,
    pub class: ClassId,
    #[serde(default)]
    pub teacher: Option<TeacherId>,
    pub hours_per_week: u32,
    /// Slots the user pinned this assignment to.
    #[serde(default)]
    pub fixed_slots: Vec<SlotId>,
}

/// One (subject, teacher set) part of a coupling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouplingPart {
    pub subject: SubjectId,
    #[serde(default)]
    pub teachers: Vec<TeacherId>,
}

/// A grouped lesson: several classes and subject/teacher combinations that
/// share the same slots. Its hours are deducted from the member assignments
/// during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupling {
    pub classes: Vec<ClassId>,
    pub parts: Vec<CouplingPart>,
    /// Member assignments the coupled hours are deducted from.
    #[serde(default)]
    pub assignments: Vec<AssignmentId>,
    pub hours_per_week: u32,
    #[serde(default)]
    pub fixed_slots: Vec<SlotId>,
}

/// Soft-preference weights and the tunable constants of the demanding-subject
/// rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverParameters {
    /// Avoid long runs of demanding subjects for a class.
    pub demanding_runs: SoftWeight,
    /// Avoid demanding subjects in afternoon periods.
    pub demanding_afternoons: SoftWeight,
    /// Length of the sliding window the run rule looks at.
    pub demanding_window: usize,
    /// Periods up to this number count as morning.
    pub morning_periods: u32,
}

impl Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            demanding_runs: SoftWeight::Medium,
            demanding_afternoons: SoftWeight::Medium,
            demanding_window: 4,
            morning_periods: 6,
        }
    }
}

/// The complete input for the timetabling problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInput {
    pub periods: Vec<Period>,
    pub slots: Vec<TimeSlot>,
    pub subjects: Vec<Subject>,
    pub classes: Vec<SchoolClass>,
    pub teachers: Vec<Teacher>,
    pub assignments: Vec<Assignment>,
    pub couplings: Vec<Coupling>,
    pub parameters: SolverParameters,
}

/// Anything that needs scheduling: a plain assignment or a coupling.
#[derive(Debug, Clone)]
pub enum TeachingUnit {
    Single(Assignment),
    Grouped(Coupling),
}

impl TeachingUnit {
    pub fn hours_per_week(&self) -> u32 {
        match self {
            TeachingUnit::Single(a) => a.hours_per_week,
            TeachingUnit::Grouped(c) => c.hours_per_week,
        }
    }

    pub fn fixed_slots(&self) -> &[SlotId] {
        match self {
            TeachingUnit::Single(a) => &a.fixed_slots,
            TeachingUnit::Grouped(c) => &c.fixed_slots,
        }
    }

    /// All participating classes, deduplicated.
    pub fn classes(&self) -> Vec<ClassId> {
        match self {
            TeachingUnit::Single(a) => vec![a.class],
            TeachingUnit::Grouped(c) => dedup(c.classes.clone()),
        }
    }

    /// All participating teachers, deduplicated.
    pub fn teachers(&self) -> Vec<TeacherId> {
        match self {
            TeachingUnit::Single(a) => a.teacher.into_iter().collect(),
            TeachingUnit::Grouped(c) => {
                dedup(c.parts.iter().flat_map(|p| p.teachers.clone()).collect())
            }
        }
    }

    /// All taught subjects, deduplicated.
    pub fn subjects(&self) -> Vec<SubjectId> {
        match self {
            TeachingUnit::Single(a) => vec![a.subject],
            TeachingUnit::Grouped(c) => dedup(c.parts.iter().map(|p| p.subject).collect()),
        }
    }

    pub fn has_class(&self, class: ClassId) -> bool {
        match self {
            TeachingUnit::Single(a) => a.class == class,
            TeachingUnit::Grouped(c) => c.classes.contains(&class),
        }
    }

    pub fn has_teacher(&self, teacher: TeacherId) -> bool {
        match self {
            TeachingUnit::Single(a) => a.teacher == Some(teacher),
            TeachingUnit::Grouped(c) => c.parts.iter().any(|p| p.teachers.contains(&teacher)),
        }
    }

    pub fn has_subject(&self, subject: SubjectId) -> bool {
        match self {
            TeachingUnit::Single(a) => a.subject == subject,
            TeachingUnit::Grouped(c) => c.parts.iter().any(|p| p.subject == subject),
        }
    }

    /// A unit is hard if any of its subjects is flagged demanding.
    pub fn is_hard(&self, subjects: &[Subject]) -> bool {
        self.subjects().iter().any(|&s| subjects[s].demanding)
    }
}

fn dedup<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values.dedup();
    values
}

/// One scheduled lesson: a slot plus everyone taking part in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub weekday: Weekday,
    pub period_number: u32,
    pub classes: Vec<ClassId>,
    pub teachers: Vec<TeacherId>,
    pub subjects: Vec<SubjectId>,
}

/// The weekly schedule of one class.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub class: ClassId,
    pub entries: Vec<ScheduleEntry>,
}

/// The weekly schedule of one teacher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSchedule {
    pub teacher: TeacherId,
    pub entries: Vec<ScheduleEntry>,
}

/// The decoded solution: all lessons plus per-entity views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub class_views: Vec<ClassSchedule>,
    pub teacher_views: Vec<TeacherSchedule>,
}
