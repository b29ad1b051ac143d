//! Repository traits (ports)

mod repositories;

pub use repositories::{
    FollowRepository, ReactionRepository, RepoResult, UserRepository, WeetRepository,
};
