use std::collections::HashSet;

use cutter_core::model::{StopId, TransitLine, Upsert};

use super::{copy_link, CutError, CutSession};

/// cuts the transit schedule and fleet, then patches the destination network
/// so that every kept route can be driven. returns the number of patched links.
pub fn cut_transit(session: &mut CutSession) -> Result<usize, CutError> {
    let stops_inside = stops_inside(session);
    log::info!(
        "{} of {} stop facilities inside the extent",
        stops_inside.len(),
        session.source.transit_schedule.facilities.len()
    );
    cut_schedule_with_all_routes(session, &stops_inside)?;
    filter_transit_vehicles(session)?;
    filter_minimal_transfer_times(session);
    let patched = add_missing_transit_links(session)?;
    session.patched_links = patched;
    Ok(patched)
}

fn stops_inside(session: &CutSession) -> HashSet<StopId> {
    session
        .source
        .transit_schedule
        .facilities
        .values()
        .filter(|stop| session.extended_extent.is_inside_coord(&stop.coord))
        .map(|stop| stop.id.clone())
        .collect()
}

/// keeps every route with at least one stop inside, copying its line and the
/// stop facilities it serves on first reference.
fn cut_schedule_with_all_routes(
    session: &mut CutSession,
    stops_inside: &HashSet<StopId>,
) -> Result<(), CutError> {
    let source = &session.source.transit_schedule;
    let dest = &mut session.dest.transit_schedule;
    for line in source.lines.values() {
        for route in line.routes.values() {
            let serves_extent = route
                .stops
                .iter()
                .any(|stop| stops_inside.contains(&stop.stop_id));
            if !serves_extent {
                continue;
            }
            for stop in route.stops.iter() {
                dest.facilities
                    .upsert_with(&stop.stop_id, || source.get_stop(&stop.stop_id).cloned())?;
            }
            let dest_line = dest
                .lines
                .upsert_with(&line.id, || Ok::<_, CutError>(TransitLine::shallow_copy(line)))?;
            dest_line.routes.insert(route.id.clone(), route.clone());
        }
    }
    log::info!(
        "kept {} of {} transit routes on {} of {} lines",
        dest.route_count(),
        source.route_count(),
        dest.lines.len(),
        source.lines.len()
    );
    Ok(())
}

/// copies the vehicle of every kept departure, and its type on first reference.
fn filter_transit_vehicles(session: &mut CutSession) -> Result<(), CutError> {
    let source = &session.source.transit_vehicles;
    let dest = &mut session.dest;
    for route in dest.transit_schedule.routes() {
        for departure in route.departures.values() {
            let vehicles = &mut dest.transit_vehicles;
            if vehicles.vehicles.contains_key(&departure.vehicle_id) {
                continue;
            }
            let vehicle = source.get_vehicle(&departure.vehicle_id)?;
            vehicles
                .vehicle_types
                .upsert_with(&vehicle.vehicle_type_id, || {
                    source.get_vehicle_type(&vehicle.vehicle_type_id).cloned()
                })?;
            vehicles.vehicles.insert(vehicle.id.clone(), vehicle.clone());
        }
    }
    log::info!(
        "kept {} of {} vehicles of {} types",
        dest.transit_vehicles.vehicles.len(),
        source.vehicles.len(),
        dest.transit_vehicles.vehicle_types.len()
    );
    Ok(())
}

/// keeps a minimal transfer time only if both of its stops were kept.
fn filter_minimal_transfer_times(session: &mut CutSession) {
    let source = &session.source.transit_schedule.minimal_transfer_times;
    let dest = &mut session.dest.transit_schedule;
    for (from, to, seconds) in source.iter() {
        if dest.facilities.contains_key(from) && dest.facilities.contains_key(to) {
            dest.minimal_transfer_times
                .set(from.clone(), to.clone(), seconds);
        }
    }
    log::debug!(
        "kept {} of {} minimal transfer times",
        dest.minimal_transfer_times.len(),
        source.len()
    );
}

/// kept routes may run over links outside the extent. those links are added
/// with the same copy rules as the network cut.
fn add_missing_transit_links(session: &mut CutSession) -> Result<usize, CutError> {
    let source = &session.source.network;
    let dest = &mut session.dest;
    let mut patched = 0;
    for route in dest.transit_schedule.routes() {
        for link_id in route.route.link_sequence() {
            if dest.network.contains_link(link_id) {
                continue;
            }
            let link = source.get_link(link_id)?;
            copy_link(link, source, &mut dest.network)?;
            patched += 1;
        }
    }
    log::info!("added {patched} links used by kept transit routes to the network");
    Ok(patched)
}
