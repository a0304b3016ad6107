use bugbase_test_utils::prelude::*;

use crate::{
    model::ticket::TicketPayload,
    server::{error::Error, service::ticket::TicketService},
};
