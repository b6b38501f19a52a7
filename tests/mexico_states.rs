//! Regression fixture: the seven-state road network.

use u_tours::dataset::mexico_states;
use u_tours::graph::WeightedGraph;
use u_tours::tour::{SearchConfig, TourCost, TourMode, TourReport, TourSearch};

fn graph() -> WeightedGraph {
    WeightedGraph::from_definition(&mexico_states()).unwrap()
}

#[test]
fn simple_tour_regression() {
    let g = graph();
    let result = TourSearch::run(&g, TourMode::Simple, &SearchConfig::default()).unwrap();

    assert_eq!(result.candidates, 5_040);
    assert_eq!(result.best_cost, TourCost::Finite(1460.0));
    assert_eq!(
        result.tour().unwrap().names(&g).unwrap(),
        [
            "Jalisco",
            "Guanajuato",
            "Michoacán",
            "Edo. de México",
            "Puebla",
            "Veracruz",
            "Oaxaca",
        ]
    );
}

#[test]
fn one_repeat_tour_regression() {
    let g = graph();
    let result = TourSearch::run(&g, TourMode::OneRepeat, &SearchConfig::default()).unwrap();

    assert_eq!(result.candidates, 141_120);
    assert_eq!(result.best_cost, TourCost::Finite(1610.0));
    let tour = result.tour().unwrap();
    assert!(tour.is_one_repeat(g.node_count()));
    assert_eq!(tour.repeated_node(), g.id("Puebla"));
    assert_eq!(
        tour.names(&g).unwrap(),
        [
            "Jalisco",
            "Guanajuato",
            "Michoacán",
            "Edo. de México",
            "Puebla",
            "Veracruz",
            "Puebla",
            "Oaxaca",
        ]
    );
}

#[test]
fn reports_render() {
    let g = graph();
    let solutions = TourSearch::run_both(&g, &SearchConfig::default()).unwrap();

    let simple = TourReport::new(&g, &solutions.simple).unwrap();
    assert_eq!(
        simple.to_string(),
        "Jalisco → Guanajuato → Michoacán → Edo. de México → Puebla → Veracruz → Oaxaca (cost: 1460)"
    );

    let repeat = TourReport::new(&g, &solutions.one_repeat).unwrap();
    assert_eq!(repeat.stops.len(), 8);
    assert_eq!(repeat.cost, Some(1610.0));
}

#[test]
fn reruns_are_identical() {
    let g = graph();
    let config = SearchConfig::default();
    let first = TourSearch::run_both(&g, &config).unwrap();
    let second = TourSearch::run_both(&g, &config).unwrap();
    assert_eq!(first.simple.best, second.simple.best);
    assert_eq!(first.one_repeat.best, second.one_repeat.best);
}

#[test]
fn removing_the_only_oaxaca_links_makes_it_unreachable() {
    let mut def = mexico_states();
    def.edges.retain(|e| e.a != "Oaxaca" && e.b != "Oaxaca");
    let g = WeightedGraph::from_definition(&def).unwrap();
    assert_eq!(g.node_count(), 7);

    let solutions = TourSearch::run_both(&g, &SearchConfig::default()).unwrap();
    assert!(!solutions.simple.is_reachable());
    assert!(!solutions.one_repeat.is_reachable());
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_search_agrees() {
    let g = graph();
    let seq = TourSearch::run_both(&g, &SearchConfig::default()).unwrap();
    let par = TourSearch::run_both(&g, &SearchConfig::default().with_parallel(true)).unwrap();
    assert_eq!(seq.simple.best, par.simple.best);
    assert_eq!(seq.one_repeat.best, par.one_repeat.best);
    assert_eq!(seq.one_repeat.candidates, par.one_repeat.candidates);
}
