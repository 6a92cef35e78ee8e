//! Mock gateway implementations for isolating services in tests.

use mockall::mock;

use crate::domain::lead_convert::LeadConvertRequest;
use crate::gateway::{GatewayResult, LeadConverter};

mock! {
    pub LeadConverter {}

    impl LeadConverter for LeadConverter {
        fn convert_lead(&self, request: &LeadConvertRequest) -> GatewayResult<()>;
    }
}
