//! Graph traversal functions: `vertices`, `out`, `values`.
//!
//! These are the only built-ins that touch an external graph. Failures
//! reported by the backend surface as `External` errors; they are never
//! confused with defects in the compiled expression.

use std::sync::Arc;

use rove_graph::{GraphError, VertexId};
use rove_ir::ops::OpId;
use rove_ir::{Atom, GraphHandle, VertexRef};

use crate::errors::{bad_argument, wrong_arg_count};
use crate::functions::{expect_arity, flatten_into};
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Lazy scan over a graph's vertex set, optionally filtered by property
/// equality.
///
/// Ids are fetched from the backend on the first pull, not at
/// construction, so building the atom never touches the graph.
struct VertexScan {
    graph: GraphHandle,
    filter: Option<(String, Atom)>,
    ids: Option<std::vec::IntoIter<VertexId>>,
    done: bool,
}

impl Iterator for VertexScan {
    type Item = Result<Atom, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.ids.is_none() {
            match self.graph.vertex_ids() {
                Ok(fetched) => self.ids = Some(fetched.into_iter()),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        let ids = self.ids.as_mut()?;
        for id in ids {
            let vertex = VertexRef::new(Arc::clone(&self.graph), id);
            match &self.filter {
                None => return Some(Ok(Atom::Vertex(vertex))),
                Some((key, want)) => match vertex.property(key) {
                    Ok(Some(value)) if &Atom::from(value.clone()) == want => {
                        return Some(Ok(Atom::Vertex(vertex)));
                    }
                    Ok(_) => {}
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                },
            }
        }
        None
    }
}

/// Lazy one-hop expansion: pulls each source vertex's outgoing
/// neighbors on demand, in source order.
struct NeighborScan {
    inputs: std::vec::IntoIter<VertexRef>,
    pending: std::vec::IntoIter<VertexRef>,
    done: bool,
}

impl Iterator for NeighborScan {
    type Item = Result<Atom, GraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if let Some(vertex) = self.pending.next() {
                return Some(Ok(Atom::Vertex(vertex)));
            }
            let source = self.inputs.next()?;
            match source.out() {
                Ok(neighbors) => self.pending = neighbors.into_iter(),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Lazy sequence of a graph's vertices.
///
/// One argument (a graph) yields every vertex; three arguments (graph,
/// property key, wanted value) yield only vertices whose property
/// equals the wanted value under strict atom equality. Vertices missing
/// the property are skipped, not errors.
pub struct VerticesFunction;

impl Function for VerticesFunction {
    fn name(&self) -> &'static str {
        "vertices"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        if args.len() != 1 && args.len() != 3 {
            return Err(wrong_arg_count(self.name(), "1 or 3 arguments", args.len()));
        }

        let graph = match ev.eval(args[0], ctx)? {
            Atom::Graph(handle) => handle,
            other => {
                return Err(bad_argument(
                    self.name(),
                    format!("first argument must be a graph, got {}", other.kind()),
                ));
            }
        };

        let filter = if args.len() == 3 {
            let key = match ev.eval(args[1], ctx)? {
                Atom::Str(key) => (*key).clone(),
                other => {
                    return Err(bad_argument(
                        self.name(),
                        format!("property key must be str, got {}", other.kind()),
                    ));
                }
            };
            Some((key, ev.eval(args[2], ctx)?))
        } else {
            None
        };

        Ok(Atom::lazy(VertexScan {
            graph,
            filter,
            ids: None,
            done: false,
        }))
    }
}

/// Lazy sequence of vertices one outgoing edge away from each input
/// vertex, in input order. Duplicates are kept; `union` removes them.
pub struct OutFunction;

impl Function for OutFunction {
    fn name(&self) -> &'static str {
        "out"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 1)?;

        let mut elements = Vec::new();
        flatten_into(ev.eval(args[0], ctx)?, &mut elements)?;

        let mut sources = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Atom::Vertex(vertex) => sources.push(vertex),
                other => {
                    return Err(bad_argument(
                        self.name(),
                        format!("expects vertices, got {}", other.kind()),
                    ));
                }
            }
        }

        Ok(Atom::lazy(NeighborScan {
            inputs: sources.into_iter(),
            pending: Vec::new().into_iter(),
            done: false,
        }))
    }
}

/// Materialized sequence of one property read from each input vertex.
///
/// Vertices missing the property contribute nothing, so the result can
/// be shorter than the input.
pub struct ValuesFunction;

impl Function for ValuesFunction {
    fn name(&self) -> &'static str {
        "values"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 2)?;

        let mut elements = Vec::new();
        flatten_into(ev.eval(args[0], ctx)?, &mut elements)?;

        let key = match ev.eval(args[1], ctx)? {
            Atom::Str(key) => key,
            other => {
                return Err(bad_argument(
                    self.name(),
                    format!("property key must be str, got {}", other.kind()),
                ));
            }
        };

        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            let Atom::Vertex(vertex) = element else {
                return Err(bad_argument(
                    self.name(),
                    format!("expects vertices, got {}", element.kind()),
                ));
            };
            if let Some(value) = vertex.property(&key)? {
                values.push(Atom::from(value));
            }
        }
        Ok(Atom::seq(values))
    }
}
