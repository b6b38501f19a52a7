//! Built-in graph definitions.

use crate::graph::{EdgeSpec, GraphDefinition, Location};

/// Seven central Mexican states with approximate centroid coordinates and
/// road costs in kilometres.
///
/// Location order is the base node order of the resulting graph.
///
/// ```
/// use u_tours::dataset::mexico_states;
/// use u_tours::graph::WeightedGraph;
///
/// let graph = WeightedGraph::from_definition(&mexico_states()).unwrap();
/// assert_eq!(graph.node_count(), 7);
/// assert_eq!(graph.edge_count(), 12);
/// ```
pub fn mexico_states() -> GraphDefinition {
    let locations = [
        ("Jalisco", 20.6597, -103.3496),
        ("Guanajuato", 21.0190, -101.2574),
        ("Michoacán", 19.5665, -101.7068),
        ("Edo. de México", 19.3564, -99.7560),
        ("Puebla", 19.0379, -98.2035),
        ("Veracruz", 19.1738, -96.1342),
        ("Oaxaca", 17.0732, -96.7266),
    ];
    let roads = [
        ("Jalisco", "Guanajuato", 220.0),
        ("Jalisco", "Michoacán", 330.0),
        ("Guanajuato", "Michoacán", 160.0),
        ("Guanajuato", "Edo. de México", 320.0),
        ("Michoacán", "Edo. de México", 210.0),
        ("Edo. de México", "Puebla", 140.0),
        ("Puebla", "Veracruz", 250.0),
        ("Veracruz", "Oaxaca", 480.0),
        ("Puebla", "Oaxaca", 380.0),
        ("Michoacán", "Puebla", 290.0),
        ("Guanajuato", "Puebla", 420.0),
        ("Jalisco", "Edo. de México", 520.0),
    ];

    GraphDefinition {
        locations: locations
            .into_iter()
            .map(|(name, lat, lon)| Location::new(name, lat, lon))
            .collect(),
        edges: roads
            .into_iter()
            .map(|(a, b, km)| EdgeSpec::new(a, b, km))
            .collect(),
    }
}
