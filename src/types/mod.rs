pub mod chain;
pub mod delegation;
pub mod network;
pub mod validator;

pub use chain::{ApiEndpoint, Apis, ChainInfo, ChainResponse, Codebase, FeeToken, Fees, GasPrice};
pub use delegation::{dec_to_f64, Coin, Delegation, DelegationResponse};
pub use network::{FeeDefaults, Network};
pub use validator::{ValidatorChain, ValidatorEntry, ValidatorForNetwork, ValidatorsResponse};
