use rand::Rng;
use rand::RngCore;

use super::graph::{Graph, NodeId, Position};

/// Minimum pairwise distance used when computing forces.
const MIN_DISTANCE: f64 = 0.01;
/// Displacements shorter than this are treated as having length [`FALLBACK_LENGTH`].
const MIN_DISPLACEMENT: f64 = 0.01;
const FALLBACK_LENGTH: f64 = 0.1;
/// Initial temperature as a fraction of the layout's extent.
const INITIAL_TEMPERATURE_FRACTION: f64 = 0.1;
/// Mean per-node movement below which relaxation stops early.
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Scatter every node uniformly in the unit square.
pub fn random_layout(graph: &mut Graph, rng: &mut dyn RngCore) {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    for id in ids {
        let position = (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));
        graph.set_position(id, position);
    }
}

/// Random start followed by `iterations` rounds of [`spring_layout`].
pub fn fresh_layout(graph: &mut Graph, iterations: usize, rng: &mut dyn RngCore) {
    random_layout(graph, rng);
    spring_layout(graph, iterations);
}

/// Relax node positions with Fruchterman-Reingold force-directed iterations.
///
/// Starts from the graph's current positions. Every node repels every other
/// with force `k²/d`, adjacent nodes attract with `d²/k`, where
/// `k = 1/√n`. Movement per iteration is capped by a temperature that cools
/// linearly from a tenth of the layout's extent. The result is centered on
/// the origin and scaled so the largest coordinate magnitude is 1.
pub fn spring_layout(graph: &mut Graph, iterations: usize) {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let n = ids.len();
    if n == 0 {
        return;
    }
    let mut pos: Vec<Position> = ids
        .iter()
        .map(|&id| graph.position(id).unwrap_or_default())
        .collect();
    let adjacent: Vec<Vec<bool>> = ids
        .iter()
        .map(|&a| ids.iter().map(|&b| graph.has_edge(a, b)).collect())
        .collect();

    let k = (1.0 / n as f64).sqrt();
    let mut temperature = extent(&pos) * INITIAL_TEMPERATURE_FRACTION;
    let cooling = temperature / (iterations as f64 + 1.0);

    for _ in 0..iterations {
        let mut moves: Vec<Position> = Vec::with_capacity(n);
        for i in 0..n {
            let (mut fx, mut fy): (f64, f64) = (0.0, 0.0);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let attraction = if adjacent[i][j] { distance / k } else { 0.0 };
                let magnitude = k * k / (distance * distance) - attraction;
                fx += dx * magnitude;
                fy += dy * magnitude;
            }
            let mut length = (fx * fx + fy * fy).sqrt();
            if length < MIN_DISPLACEMENT {
                length = FALLBACK_LENGTH;
            }
            moves.push((fx * temperature / length, fy * temperature / length));
        }

        let mut total_sq: f64 = 0.0;
        for (p, m) in pos.iter_mut().zip(&moves) {
            p.0 += m.0;
            p.1 += m.1;
            total_sq += m.0 * m.0 + m.1 * m.1;
        }
        temperature -= cooling;
        if total_sq.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(&mut pos);
    for (&id, &p) in ids.iter().zip(&pos) {
        graph.set_position(id, p);
    }
}

/// Largest side of the axis-aligned bounding box.
fn extent(pos: &[Position]) -> f64 {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(x, y) in pos {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    (max_x - min_x).max(max_y - min_y)
}

/// Center on the origin and scale into [-1, 1].
fn rescale(pos: &mut [Position]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let mut lim: f64 = 0.0;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        lim = lim.max(p.0.abs()).max(p.1.abs());
    }
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= lim;
            p.1 /= lim;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generators::{complete_graph, lattice};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn within_unit_box(graph: &Graph) -> bool {
        graph
            .nodes()
            .all(|(_, a)| a.position.0.abs() <= 1.0 + 1e-9 && a.position.1.abs() <= 1.0 + 1e-9)
    }

    #[test]
    fn random_layout_stays_in_unit_square() {
        let mut g = lattice(4).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        random_layout(&mut g, &mut rng);
        assert!(g.nodes().all(|(_, a)| (0.0..1.0).contains(&a.position.0)
            && (0.0..1.0).contains(&a.position.1)));
    }

    #[test]
    fn spring_layout_is_centered_and_scaled() {
        let mut g = complete_graph(5).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        random_layout(&mut g, &mut rng);
        spring_layout(&mut g, 50);

        assert!(within_unit_box(&g));
        let n = g.node_count() as f64;
        let cx: f64 = g.nodes().map(|(_, a)| a.position.0).sum::<f64>() / n;
        let cy: f64 = g.nodes().map(|(_, a)| a.position.1).sum::<f64>() / n;
        assert!(cx.abs() < 1e-9 && cy.abs() < 1e-9);
        let max_coord = g
            .nodes()
            .map(|(_, a)| a.position.0.abs().max(a.position.1.abs()))
            .fold(0.0, f64::max);
        assert!((max_coord - 1.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_nodes_do_not_move() {
        // Zero extent means zero temperature.
        let mut g = complete_graph(3).unwrap();
        spring_layout(&mut g, 5);
        assert!(g.nodes().all(|(_, a)| a.position == (0.0, 0.0)));
    }

    #[test]
    fn empty_graph_is_a_noop() {
        let mut g = Graph::new();
        spring_layout(&mut g, 5);
        assert_eq!(g.node_count(), 0);
    }
}
