pub mod background;
pub mod display;
pub mod engine;
pub mod external_engine;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod mode;
pub mod position_counter;
pub mod selector;
pub mod versus;
