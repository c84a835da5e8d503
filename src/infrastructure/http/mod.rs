pub mod prober;

pub use prober::HttpProber;
