//! Property-based tests for trigger closure resolution

use proptest::prelude::*;
use wireup::domain::entities::{AttributeUse, DeclaredType};
use wireup::domain::ports::NoopSink;
use wireup::domain::services::ClosureResolver;
use wireup::domain::value_objects::AttributeMeta;
use wireup::infrastructure::CatalogPass;
use wireup::QualifiedName;

const NODES: usize = 6;

fn node(i: usize) -> QualifiedName {
    if i == 0 {
        QualifiedName::parse("wireup.Wire").unwrap()
    } else {
        QualifiedName::parse(&format!("app.Attr{}", i)).unwrap()
    }
}

/// Attribute graph: edge (a, b) means attribute `a` is marked with `b`.
fn catalog(edges: &[(usize, usize)]) -> CatalogPass {
    let types = (0..NODES)
        .map(|i| {
            edges
                .iter()
                .filter(|(a, _)| *a == i)
                .fold(
                    DeclaredType::attribute(node(i), AttributeMeta::runtime_type_only()),
                    |ty, (_, b)| ty.with_attribute_use(AttributeUse::new(node(*b))),
                )
        })
        .collect();
    CatalogPass::new(types)
}

/// Nodes reachable from the trigger by following markings backwards
fn reachable(edges: &[(usize, usize)]) -> Vec<QualifiedName> {
    let mut seen = vec![false; NODES];
    seen[0] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for (a, b) in edges {
            if seen[*b] && !seen[*a] {
                seen[*a] = true;
                changed = true;
            }
        }
    }
    let mut names: Vec<QualifiedName> = (0..NODES).filter(|i| seen[*i]).map(node).collect();
    names.sort();
    names
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// PROPERTY: Resolution terminates on any graph, cycles included,
    /// and yields exactly the attributes that reach the trigger
    #[test]
    fn property_closure_is_reachability(
        edges in prop::collection::vec((0..NODES, 0..NODES), 0..16)
    ) {
        let catalog = catalog(&edges);
        let closure = ClosureResolver::new(&catalog, &NoopSink).resolve(&node(0));

        let members: Vec<QualifiedName> = closure.members().cloned().collect();
        prop_assert_eq!(members, reachable(&edges));
        prop_assert!(closure.contains(&node(0)));
    }

    /// PROPERTY: Resolving twice gives the same closure
    #[test]
    fn property_closure_deterministic(
        edges in prop::collection::vec((0..NODES, 0..NODES), 0..16)
    ) {
        let catalog = catalog(&edges);
        let first = ClosureResolver::new(&catalog, &NoopSink).resolve(&node(0));
        let second = ClosureResolver::new(&catalog, &NoopSink).resolve(&node(0));
        prop_assert_eq!(first, second);
    }
}
