pub mod classifier;
pub mod clock;
pub mod enricher;
pub mod errors;
pub mod locale;
pub mod models;
pub mod pipeline;
pub mod prompt_template;
pub mod providers;
