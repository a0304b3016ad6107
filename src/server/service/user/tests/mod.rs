use bugbase_test_utils::prelude::*;

use crate::{model::user::UserPayload, server::error::Error};
