pub mod hash;
pub mod hash_domain;
