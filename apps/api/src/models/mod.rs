pub mod answer_bank;
pub mod profile;
