use cutter_core::model::SUBPOPULATION_ATTRIBUTE;

use super::CutSession;

/// copies every relevant person. with an `outside_subpopulation` marker,
/// persons that are only partially inside are tagged with it.
pub fn cut_persons(session: &mut CutSession, outside_subpopulation: Option<&str>) {
    for person in session.source.population.persons.values() {
        if !session.relevant.contains(&person.id) {
            continue;
        }
        let mut copy = person.clone();
        if let Some(marker) = outside_subpopulation {
            if session.partially_inside.contains(&person.id) {
                copy.attributes.insert(
                    SUBPOPULATION_ATTRIBUTE.to_string(),
                    serde_json::Value::String(marker.to_string()),
                );
            }
        }
        session.dest.population.add_person(copy);
    }
    log::info!(
        "kept {} of {} persons",
        session.dest.population.persons.len(),
        session.source.population.persons.len()
    );
}
