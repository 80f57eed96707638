//! Sample graphs for tests and documentation.

use crate::{MemoryGraph, PropertyValue};

/// Build the classic six-vertex sample graph.
///
/// Four people (marko, vadas, josh, peter) and two pieces of software
/// (lop, ripple), wired with `knows` and `created` edges:
///
/// ```text
/// marko -knows-> vadas      josh -created-> ripple
/// marko -knows-> josh       josh -created-> lop
/// marko -created-> lop      peter -created-> lop
/// ```
pub fn modern() -> MemoryGraph {
    let mut g = MemoryGraph::new();

    let marko = g.add_vertex([
        ("name", PropertyValue::from("marko")),
        ("age", PropertyValue::from(29_i64)),
    ]);
    let vadas = g.add_vertex([
        ("name", PropertyValue::from("vadas")),
        ("age", PropertyValue::from(27_i64)),
    ]);
    let lop = g.add_vertex([
        ("name", PropertyValue::from("lop")),
        ("lang", PropertyValue::from("java")),
    ]);
    let josh = g.add_vertex([
        ("name", PropertyValue::from("josh")),
        ("age", PropertyValue::from(32_i64)),
    ]);
    let ripple = g.add_vertex([
        ("name", PropertyValue::from("ripple")),
        ("lang", PropertyValue::from("java")),
    ]);
    let peter = g.add_vertex([
        ("name", PropertyValue::from("peter")),
        ("age", PropertyValue::from(35_i64)),
    ]);

    let edges = [
        (marko, "knows", vadas),
        (marko, "knows", josh),
        (marko, "created", lop),
        (josh, "created", ripple),
        (josh, "created", lop),
        (peter, "created", lop),
    ];
    for (from, label, to) in edges {
        // All endpoints were just added; the only failure mode is a bug here.
        if let Err(e) = g.add_edge(from, label, to) {
            unreachable!("sample graph wiring is static: {e}");
        }
    }

    g
}
