pub mod customer_feedback;
pub mod morning_check_in;
pub mod team_retrospective;

// Re-export morning_check_in constructors
pub use morning_check_in::morning_check_in;

// Re-export customer_feedback constructors
pub use customer_feedback::{customer_feedback, satisfaction_score};

// Re-export team_retrospective constructors
pub use team_retrospective::team_retrospective;
