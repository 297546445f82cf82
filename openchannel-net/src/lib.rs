// openchannel-net/src/lib.rs
pub mod client;
pub mod clock;
pub mod transport;

pub use client::stats::StatsWindow;
pub use client::{AppStatusAction, Client};
pub use clock::{Clock, FixedClock, SystemClock};
pub use openchannel_common::{
    error::{OcError, Result},
    model::{
        App, CustomData, Developer, DeveloperGroup, Field, File, HasCustomData, Id, Model, Ownership,
        Record, Statistics, Stats, Status, User, UserGroup,
    },
    Config,
};
pub use transport::{ApiRequest, ApiResponse, BasicAuth, HttpTransport, RequestBody, Transport};
