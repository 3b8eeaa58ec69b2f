pub use branch::*;
pub use confirmation::*;
pub use fueling::*;
pub use job::*;
pub use timeline::*;
pub use timestamp::*;

mod branch;
mod confirmation;
mod fueling;
mod job;
mod timeline;
mod timestamp;
