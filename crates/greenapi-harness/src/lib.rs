#![forbid(unsafe_code)]
//! # Green API gateway harness
//! Integration checks for the [Green API] messaging gateway: `sendMessage` and
//! `getChatHistory` are called with fixed inputs and the HTTP status of every
//! call is compared against the expected one.
//!
//! Requests are sent with [`reqwest`] on [`tokio`], bodies are encoded with
//! [`serde_json`] and progress is reported through [`tracing`].
//!
//! ```no_run
//! use greenapi_harness::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     greenapi_harness::telemetry::init()?;
//!     let gateway = Gateway::new(GatewayConfig::load()?)?;
//!     let report = run_all(&gateway, &RunOptions::default()).await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! [Green API]: https://green-api.com/en/docs/api/
//! [`reqwest`]: https://docs.rs/reqwest
//! [`tokio`]: https://docs.rs/tokio
//! [`serde_json`]: https://docs.rs/serde_json
//! [`tracing`]: https://docs.rs/tracing

#[macro_export]
macro_rules! gateway_api_method {
    (
        $(#[$req_attr:meta])*
        method = $method:literal,
        request = $Req:ident {
            required {
                $( $req_f:ident : $ReqT:ty ),* $(,)?
            },
            optional {
                $( $(#[$opt_attr:meta])* $opt_f:ident : $OptT:ty ),* $(,)?
            }
        },
    ) => {
        #[derive(::serde::Serialize, ::serde::Deserialize, Clone, Debug, Default, PartialEq)]
        #[serde(rename_all = "camelCase")]
        #[non_exhaustive]
        $(#[$req_attr])*
        pub struct $Req {
            $( pub $req_f : $ReqT, )*
            $( $(#[$opt_attr])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $opt_f : Option<$OptT>, )*
        }

        impl $crate::api::types::GatewayRequest for $Req {
            type Args = ($($ReqT),*);
            const METHOD: &'static str = $method;

            fn new(($($req_f),*): ($($ReqT),*)) -> Self {
                Self {
                    $( $req_f, )*
                    $( $opt_f: None, )*
                }
            }

            fn chat_id(&self) -> &$crate::api::types::ChatId {
                &self.chat_id
            }
        }

        impl $Req {
            paste::paste! {
                $(
                    #[doc = concat!("Sets the field `", stringify!($opt_f), "`")]
                    pub fn [<with_ $opt_f>](mut self, value: $OptT) -> Self {
                        self.$opt_f = Some(value);
                        self
                    }
                )*
            }
        }
    };
}

pub mod client;
pub mod config;
pub mod error;
pub mod harness;
pub mod prelude;
pub mod telemetry;
/// Gateway methods
pub mod api {
    /// `getChatHistory` method
    pub mod journals;
    /// `sendMessage` method
    pub mod sending;
    pub mod types;
}

pub use self::client::Gateway;
