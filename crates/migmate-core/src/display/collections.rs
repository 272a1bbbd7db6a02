//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers that format collections with consistent structure and
//! graceful empty-collection handling, each one carrying the message its
//! empty state should read as.

use std::{fmt, ops::Index};

use crate::models::{PlannedTask, Resource};

/// Newtype wrapper for displaying a flat list of planned tasks.
///
/// Used for the full checklist and for per-stage listings. Each task is
/// rendered with its own Display implementation; an empty list renders a
/// friendly message instead of nothing.
#[derive(Debug)]
pub struct TaskList(pub Vec<PlannedTask>);

impl TaskList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&PlannedTask> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedTask> {
        self.0.iter()
    }
}

impl Index<usize> for TaskList {
    type Output = PlannedTask;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TaskList {
    type Item = PlannedTask;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a PlannedTask;
    type IntoIter = std::slice::Iter<'a, PlannedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for the bounded next-steps list.
///
/// Unlike [`TaskList`], an empty collection is good news here: it means
/// every planned task has been completed, and the Display output says so.
#[derive(Debug)]
pub struct NextSteps(pub Vec<PlannedTask>);

impl NextSteps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of next steps.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the task at the given index.
    pub fn get(&self, index: usize) -> Option<&PlannedTask> {
        self.0.get(index)
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedTask> {
        self.0.iter()
    }
}

impl Index<usize> for NextSteps {
    type Output = PlannedTask;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for NextSteps {
    type Item = PlannedTask;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NextSteps {
    type Item = &'a PlannedTask;
    type IntoIter = std::slice::Iter<'a, PlannedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for NextSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "All planned tasks are complete. Nothing is waiting on you.")
        } else {
            writeln!(f, "# Next steps")?;
            writeln!(f)?;
            for task in &self.0 {
                write!(f, "{task}")?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the deduplicated resource list.
#[derive(Debug)]
pub struct ResourceList(pub Vec<Resource>);

impl ResourceList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of resources in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the resource at the given index.
    pub fn get(&self, index: usize) -> Option<&Resource> {
        self.0.get(index)
    }

    /// Get an iterator over the resources.
    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.0.iter()
    }
}

impl Index<usize> for ResourceList {
    type Output = Resource;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ResourceList {
    type Item = Resource;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceList {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ResourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No resources for the current plan.")
        } else {
            writeln!(f, "# Resources")?;
            writeln!(f)?;
            for resource in &self.0 {
                write!(f, "{resource}")?;
            }
            Ok(())
        }
    }
}
