//! The default pattern-action table.

use wikifact_infobox::{Client, InfoboxError};
use wikifact_patact::{ActionError, PatternTable};

/// Builds the dispatch table against the given client.
///
/// Entry order is answer order when several templates match one query.
/// Every lookup action captures its own clone of the client; clones
/// share the connection pool.
pub fn build_table(client: &Client) -> PatternTable {
    let birth = client.clone();
    let radius = client.clone();
    let decision = client.clone();
    let hex = client.clone();
    let rgb = client.clone();

    PatternTable::builder()
        .entry("when was % born", move |args| {
            let person = args.join(" ");
            Ok(vec![birth.birth_date(&person).map_err(lookup)?])
        })
        .entry("what is the polar radius of %", move |args| {
            Ok(vec![radius.polar_radius(&args[0]).map_err(lookup)?])
        })
        .entry("what is the decision date of case %", move |args| {
            let case = args.join(" ");
            Ok(vec![decision.decision_date(&case).map_err(lookup)?])
        })
        .entry("what is the hex triplet of %", move |args| {
            Ok(vec![hex.hex_triplet(&args[0]).map_err(lookup)?])
        })
        .entry("what is the rgb value of %", move |args| {
            Ok(vec![rgb.rgb_value(&args[0]).map_err(lookup)?])
        })
        .entry("bye", |_| Err(ActionError::Terminate))
        .build()
}

fn lookup(err: InfoboxError) -> ActionError {
    ActionError::Lookup(err.to_string())
}
