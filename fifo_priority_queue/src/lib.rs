//! This is priority queue that serves equal priorities in first-in first-out order.
//!
//! It keeps one FIFO bucket per priority inside an IndexMap and sorts the
//! priority keys numerically wherever priority order matters.
//!
//! Each entry has associated *priority*: a positive integer represented as
//! [`NonZeroU64`]. Values are opaque and may repeat.
//!
//! Popping returns the oldest-added value with the biggest priority.
//! Pushing appends a value to the bucket of its priority.
//! Also it is possible to move the first value equal to a probe to a new
//! priority; the moved value is treated as freshly pushed there.
//!
//! Push is ***O(1)*** amortized; pop and peek are ***O(p)*** in the number of
//! distinct priorities; len is ***O(1)***; the by-value priority change scans
//! the queue in pop order and is ***O(n)***.
//!
//! [`NonZeroU64`]: std::num::NonZeroU64
//!
//! # Examples
//!
//! This is a small incident triage loop. Alerts arrive with a severity and
//! must be handled most-severe first, but alerts of the same severity must
//! be handled in arrival order so none of them starves. A duty operator can
//! escalate an alert that turned out to be worse than reported.
//!
//! This example shows how [`change_priority`] reorders the queue while
//! keeping every other alert in place.
//!
//! [`change_priority`]: struct.FifoPriorityQueue.html#method.change_priority
//!
//! ```
//! use fifo_priority_queue::FifoPriorityQueue;
//! use std::num::NonZeroU64;
//!
//! #[derive(Debug, PartialEq, Clone, Copy)]
//! struct Alert {
//!     source: &'static str,
//! }
//!
//! fn severity(level: u64) -> NonZeroU64 {
//!     NonZeroU64::new(level).expect("severity levels start at 1")
//! }
//!
//! let mut triage = FifoPriorityQueue::new();
//!
//! // A quiet morning: mostly routine, one paging alert.
//! triage.push(Alert { source: "disk-usage" }, severity(1));
//! triage.push(Alert { source: "cert-expiry" }, severity(1));
//! triage.push(Alert { source: "api-5xx" }, severity(3));
//! triage.push(Alert { source: "cron-skew" }, severity(1));
//!
//! // The paging alert is handled first.
//! assert_eq!(triage.pop(), Some(Alert { source: "api-5xx" }));
//!
//! // The certificate expires today after all. Escalate it: it keeps its
//! // identity but now competes at severity 2.
//! let escalated = triage
//!     .change_priority(&Alert { source: "cert-expiry" }, severity(2))
//!     .expect("the alert is still queued");
//! assert_eq!(escalated, severity(1));
//!
//! // Remaining alerts drain by severity, arrival order within severity.
//! let order: Vec<&str> = triage.into_iter().map(|alert| alert.source).collect();
//! assert_eq!(order, vec!["cert-expiry", "disk-usage", "cron-skew"]);
//! ```

mod fifo_priority_queue;

pub use crate::fifo_priority_queue::{
    ChangePriorityNotFoundError, FifoPriorityQueue, IntoIter, Iter,
};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
