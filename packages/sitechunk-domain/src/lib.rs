pub mod chunk;
pub mod dataset;
pub mod page;
pub mod team;
pub mod topic;

pub use chunk::Chunk;
pub use dataset::{Dataset, PipelineOutput};
pub use page::PageRecord;
pub use team::{Socials, TeamMember};
pub use topic::TopicRow;
