pub mod run;

pub use run::execute_run;
