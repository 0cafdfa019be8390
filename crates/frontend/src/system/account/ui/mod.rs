pub mod page;
pub mod wizard;

pub use page::AccountLifecyclePage;
pub use wizard::AccountLifecycleWizard;
