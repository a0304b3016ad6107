//! Batch loaders for related rows.
//!
//! Each loader takes the foreign key values of a page of rows, fetches every referenced row
//! with a single `IN (...)` query and returns the DTOs keyed by ID. Unset keys are skipped.

use std::collections::{BTreeSet, HashMap};

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        lookup::{StateDto, TicketChangeTypeDto},
        ticket::TicketDto,
        user::UserDto,
    },
    server::{
        data::{
            lookup::{StateRepository, TicketChangeTypeRepository},
            ticket::TicketRepository,
            user::UserRepository,
        },
        error::Error,
    },
};

/// Collects the distinct foreign key values that are set, in ascending order
pub fn distinct_ids(ids: impl IntoIterator<Item = Option<i64>>) -> Vec<i64> {
    ids.into_iter()
        .flatten()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub async fn users_by_id(
    db: &DatabaseConnection,
    user_ids: impl IntoIterator<Item = Option<i64>>,
) -> Result<HashMap<i64, UserDto>, Error> {
    let users = UserRepository::new(db)
        .get_many_by_ids(&distinct_ids(user_ids))
        .await?;

    Ok(users
        .into_iter()
        .map(|user| (user.id, UserDto::from(user)))
        .collect())
}

pub async fn states_by_id(
    db: &DatabaseConnection,
    state_ids: impl IntoIterator<Item = Option<i64>>,
) -> Result<HashMap<i64, StateDto>, Error> {
    let states = StateRepository::new(db)
        .get_many_by_ids(&distinct_ids(state_ids))
        .await?;

    Ok(states
        .into_iter()
        .map(|state| (state.id, StateDto::from(state)))
        .collect())
}

pub async fn tickets_by_id(
    db: &DatabaseConnection,
    ticket_ids: impl IntoIterator<Item = Option<i64>>,
) -> Result<HashMap<i64, TicketDto>, Error> {
    let tickets = TicketRepository::new(db)
        .get_many_by_ids(&distinct_ids(ticket_ids))
        .await?;

    Ok(tickets
        .into_iter()
        .map(|ticket| (ticket.id, TicketDto::from(ticket)))
        .collect())
}

pub async fn ticket_change_types_by_id(
    db: &DatabaseConnection,
    ticket_change_type_ids: impl IntoIterator<Item = Option<i64>>,
) -> Result<HashMap<i64, TicketChangeTypeDto>, Error> {
    let change_types = TicketChangeTypeRepository::new(db)
        .get_many_by_ids(&distinct_ids(ticket_change_type_ids))
        .await?;

    Ok(change_types
        .into_iter()
        .map(|change_type| (change_type.id, TicketChangeTypeDto::from(change_type)))
        .collect())
}

/// Looks up the related row for an optional foreign key
pub fn lookup<T: Clone>(map: &HashMap<i64, T>, id: Option<i64>) -> Option<T> {
    id.and_then(|id| map.get(&id).cloned())
}
