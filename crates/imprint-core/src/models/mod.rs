pub mod report;
pub mod response;
pub mod riasec;
pub mod safety;
pub mod score;
