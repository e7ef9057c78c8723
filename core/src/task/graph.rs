use std::collections::{HashMap, HashSet};

use super::TaskDescriptor;
use crate::error::GraphError;

/// File-dependency graph over a set of task descriptors (DAG)
///
/// Task B depends on task A when one of B's `file_dep` entries is one of A's
/// `targets`. This only checks the wiring; running tasks is the engine's job.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    /// Dependency edges: task name -> names of producing tasks
    edges: HashMap<String, Vec<String>>,

    /// Reverse edges: task name -> names of tasks that consume its targets
    reverse_edges: HashMap<String, Vec<String>>,

    /// `file_dep` entries no task produces, in first-seen order
    external: Vec<String>,

    /// Original insertion order (for stable sorting)
    insertion_order: Vec<String>,
}

impl TaskGraph {
    /// Construct the graph from a task list
    pub fn from_tasks(tasks: &[TaskDescriptor]) -> Result<Self, GraphError> {
        let mut names = HashSet::new();
        let mut producers: HashMap<&str, &str> = HashMap::new();
        let mut insertion_order = Vec::new();

        for task in tasks {
            if !names.insert(task.name.as_str()) {
                return Err(GraphError::DuplicateTaskName(task.name.clone()));
            }
            for target in &task.targets {
                if let Some(first) = producers.insert(target, &task.name) {
                    return Err(GraphError::DuplicateTarget {
                        target: target.clone(),
                        first: first.to_string(),
                        second: task.name.clone(),
                    });
                }
            }
            insertion_order.push(task.name.clone());
        }

        let mut edges: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse_edges: HashMap<String, Vec<String>> = HashMap::new();
        let mut external = Vec::new();
        let mut seen_external = HashSet::new();

        for task in tasks {
            let deps = edges.entry(task.name.clone()).or_default();
            for dep in &task.file_dep {
                match producers.get(dep.as_str()) {
                    Some(&producer) => {
                        if !deps.iter().any(|d| d == producer) {
                            deps.push(producer.to_string());
                            reverse_edges
                                .entry(producer.to_string())
                                .or_default()
                                .push(task.name.clone());
                        }
                    }
                    None => {
                        if seen_external.insert(dep.clone()) {
                            external.push(dep.clone());
                        }
                    }
                }
            }
        }

        Ok(Self {
            edges,
            reverse_edges,
            external,
            insertion_order,
        })
    }

    /// Validate dependency relationships
    pub fn validate(&self) -> Result<(), GraphError> {
        if let Some(cycle) = self.detect_cycle() {
            return Err(GraphError::CircularDependency(cycle));
        }
        Ok(())
    }

    /// Files that must already exist before any task runs.
    pub fn external_inputs(&self) -> &[String] {
        &self.external
    }

    /// Group task names into dependency stages (Kahn's algorithm)
    ///
    /// Every task in a stage only consumes targets of earlier stages.
    pub fn stages(&self) -> Result<Vec<Vec<String>>, GraphError> {
        let mut in_degree: HashMap<&str, usize> = self
            .insertion_order
            .iter()
            .map(|name| {
                let degree = self.edges.get(name).map_or(0, Vec::len);
                (name.as_str(), degree)
            })
            .collect();

        let mut stages: Vec<Vec<String>> = Vec::new();
        let mut current_stage: Vec<String> = self
            .insertion_order
            .iter()
            .filter(|name| in_degree.get(name.as_str()) == Some(&0))
            .cloned()
            .collect();

        let mut processed = 0;

        while !current_stage.is_empty() {
            processed += current_stage.len();

            let mut next_stage = Vec::new();
            for name in &current_stage {
                for dependent in self.reverse_edges.get(name).into_iter().flatten() {
                    if let Some(degree) = in_degree.get_mut(dependent.as_str()) {
                        *degree -= 1;
                        if *degree == 0 {
                            next_stage.push(dependent.clone());
                        }
                    }
                }
            }

            // Preserve input order
            next_stage.sort_by_key(|name| self.position(name));

            stages.push(std::mem::replace(&mut current_stage, next_stage));
        }

        if processed != self.insertion_order.len() {
            return Err(GraphError::CircularDependency(
                self.detect_cycle()
                    .unwrap_or_else(|| "unable to order tasks".to_string()),
            ));
        }

        Ok(stages)
    }

    fn position(&self, name: &str) -> usize {
        self.insertion_order
            .iter()
            .position(|n| n == name)
            .unwrap_or(usize::MAX)
    }

    /// Detect circular dependencies using DFS
    fn detect_cycle(&self) -> Option<String> {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        for name in &self.insertion_order {
            if !visited.contains(name) && self.dfs_cycle(name, &mut visited, &mut stack) {
                return Some(stack.join(" -> "));
            }
        }

        None
    }

    fn dfs_cycle(
        &self,
        node: &str,
        visited: &mut HashSet<String>,
        stack: &mut Vec<String>,
    ) -> bool {
        visited.insert(node.to_string());
        stack.push(node.to_string());

        for dep in self.edges.get(node).into_iter().flatten() {
            // Dependency already on the current path closes a cycle
            if let Some(pos) = stack.iter().position(|x| x == dep) {
                stack.push(dep.clone());
                *stack = stack[pos..].to_vec();
                return true;
            }

            if !visited.contains(dep) && self.dfs_cycle(dep, visited, stack) {
                return true;
            }
        }

        stack.pop();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, deps: &[&str], targets: &[&str]) -> TaskDescriptor {
        TaskDescriptor {
            name: name.to_string(),
            actions: vec![format!("run {name}")],
            file_dep: deps.iter().map(|s| s.to_string()).collect(),
            targets: targets.iter().map(|s| s.to_string()).collect(),
            clean: vec![],
        }
    }

    #[test]
    fn orders_producer_before_consumer() {
        let tasks = vec![
            task("predict", &["a.fa", "a.fa.orfs"], &["a.fa.pep"]),
            task("orfs", &["a.fa"], &["a.fa.orfs"]),
        ];
        let graph = TaskGraph::from_tasks(&tasks).unwrap();
        graph.validate().unwrap();

        assert_eq!(
            graph.stages().unwrap(),
            vec![vec!["orfs".to_string()], vec!["predict".to_string()]]
        );
        assert_eq!(graph.external_inputs(), ["a.fa".to_string()]);
    }

    #[test]
    fn independent_tasks_share_a_stage_in_input_order() {
        let tasks = vec![task("b", &["b.fa"], &["b.out"]), task("a", &["a.fa"], &["a.out"])];
        let graph = TaskGraph::from_tasks(&tasks).unwrap();

        assert_eq!(
            graph.stages().unwrap(),
            vec![vec!["b".to_string(), "a".to_string()]]
        );
    }

    #[test]
    fn rejects_duplicate_names() {
        let tasks = vec![task("x", &[], &["1"]), task("x", &[], &["2"])];
        assert_eq!(
            TaskGraph::from_tasks(&tasks).unwrap_err(),
            GraphError::DuplicateTaskName("x".to_string())
        );
    }

    #[test]
    fn rejects_shared_targets() {
        let tasks = vec![task("x", &[], &["out"]), task("y", &[], &["out"])];
        assert!(matches!(
            TaskGraph::from_tasks(&tasks),
            Err(GraphError::DuplicateTarget { .. })
        ));
    }

    #[test]
    fn detects_cycles() {
        let tasks = vec![task("a", &["b.out"], &["a.out"]), task("b", &["a.out"], &["b.out"])];
        let graph = TaskGraph::from_tasks(&tasks).unwrap();

        match graph.validate() {
            Err(GraphError::CircularDependency(path)) => assert_eq!(path, "a -> b -> a"),
            other => panic!("expected cycle, got {other:?}"),
        }
        assert!(graph.stages().is_err());
    }
}
