//! Route registry
//!
//! Append-only list of named routes addressed by index. Entries are
//! never removed, only disabled.

use soroban_sdk::{Address, Env, String};

use crate::error::RouterError;
use crate::events::{emit_route_added, emit_route_disabled, emit_route_enabled};
use crate::storage::{read_config, read_route, read_route_count, write_route, write_route_count};
use crate::types::RouteEntry;

/// Register `route` under the next index, enabled
pub fn add_route(env: &Env, name: String, route: Address) -> Result<u32, RouterError> {
    let config = read_config(env)?;
    config.owner.require_auth();

    let index = read_route_count(env);
    let entry = RouteEntry {
        name: name.clone(),
        route: route.clone(),
        enabled: true,
    };
    write_route(env, index, &entry);
    write_route_count(env, index + 1);

    emit_route_added(env, &config.owner, &name, &route, index);
    Ok(index)
}

/// Flip a route's enabled flag, failing if it is already in that state
pub fn set_enabled(env: &Env, index: u32, enabled: bool) -> Result<(), RouterError> {
    let config = read_config(env)?;
    config.owner.require_auth();

    let mut entry = load(env, index)?;
    if entry.enabled == enabled {
        return Err(if enabled {
            RouterError::RouteAlreadyEnabled
        } else {
            RouterError::RouteAlreadyDisabled
        });
    }

    entry.enabled = enabled;
    write_route(env, index, &entry);

    if enabled {
        emit_route_enabled(env, &config.owner, &entry.name, &entry.route, index);
    } else {
        emit_route_disabled(env, &config.owner, &entry.name, &entry.route, index);
    }
    Ok(())
}

pub fn load(env: &Env, index: u32) -> Result<RouteEntry, RouterError> {
    read_route(env, index).ok_or(RouterError::RouteNotFound)
}

/// Route contract for an index that exists and is enabled
pub fn enabled_route(env: &Env, index: u32) -> Result<Address, RouterError> {
    let entry = load(env, index)?;
    if !entry.enabled {
        return Err(RouterError::RouteDisabled);
    }
    Ok(entry.route)
}
