// rsvp-client/src/client/mod.rs
// Transports: network (reqwest) and in-process (tower oneshot)

mod http;
#[cfg(feature = "in-process")]
mod http_oneshot;

pub use self::http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use self::http_oneshot::OneshotHttpClient;
