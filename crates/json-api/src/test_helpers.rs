//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use turtleman::{
    customers::{
        CustomersService, RecordService,
        records::{CustomerId, CustomerRecord},
    },
    stores::MemoryCustomerStore,
};
use turtleman_app::context::AppContext;

use crate::{customers::errors::envelope_catcher, state::State};

pub(crate) fn make_customer(id: i64) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::new(id),
        first_name: "Man".to_owned(),
        last_name: "Turtle".to_owned(),
        email: format!("man{id}@turtle.sea"),
        created_at: Timestamp::UNIX_EPOCH,
        modified_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn in_memory_customers() -> RecordService {
    RecordService::new(Arc::new(MemoryCustomerStore::new()))
}

pub(crate) fn state_with_customers(customers: impl CustomersService + 'static) -> Arc<State> {
    State::from_app_context(AppContext {
        customers: Arc::new(customers),
    })
}

pub(crate) fn customers_service(
    customers: impl CustomersService + 'static,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_customers(customers)))
            .push(route),
    )
    .catcher(envelope_catcher())
}
