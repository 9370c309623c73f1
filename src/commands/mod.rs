pub mod count;
pub mod favorites;
pub mod history;
pub mod merge;
pub mod preview;
pub mod split;
