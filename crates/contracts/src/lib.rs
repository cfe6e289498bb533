pub mod approvals;
pub mod dom;
pub mod ids;
pub mod preview;
pub mod selection;
