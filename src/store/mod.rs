pub mod local;
pub mod remote;
pub mod seed;
pub mod traits;

pub use local::LocalCache;
pub use remote::RemoteStore;
pub use traits::RemoteAds;
