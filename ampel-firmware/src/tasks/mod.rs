// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Einzige Kopplung: das Flag LIGHT_IS_GREEN (Ampel schreibt, Summer liest).
// Die Summer-Tasks laufen auf dem InterruptExecutor, die Ampel im Thread-Mode.

pub mod buzzer;
pub mod crossing;

// Re-export Tasks für einfachen Import
pub use buzzer::{BUZZER_STARTED, buzzer_start_task, buzzer_task};
pub use crossing::crossing_task;
