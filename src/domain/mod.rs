pub mod run;

pub use run::RunSettings;
