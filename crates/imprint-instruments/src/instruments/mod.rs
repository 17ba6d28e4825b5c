pub mod adhd_11_17;
pub mod adhd_7_10;
pub mod career_compass;
pub mod neural_imprint;
pub mod trauma_loss;
