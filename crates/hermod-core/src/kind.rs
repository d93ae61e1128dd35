//! Webhook event kind enumeration and name mappings.
//!
//! The recognized set of event kinds is fixed at build time. Each kind has
//! a canonical snake_case identifier used on the wire and in logs, and a
//! camelCase handler method name used by consumer services that bind
//! handlers by method name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a supported webhook event category.
///
/// The set is closed: an event kind that is not listed here is not
/// recognized by the platform and cannot be represented, which keeps
/// dispatch tables total over their keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Endpoint health probe sent when a hook is installed.
    Ping,
    /// Repository was forked.
    Fork,
    /// Commits were pushed to a repository.
    Push,
    /// A branch or tag was created.
    Create,
    /// Someone starred (watched) the repository.
    WatchStarted,

    /// A release was published.
    ReleasePublished,
    /// A release was unpublished.
    ReleaseUnpublished,
    /// A release draft was created.
    ReleaseCreated,
    /// A release was edited.
    ReleaseEdited,
    /// A release was deleted.
    ReleaseDeleted,
    /// A release was marked as a pre-release.
    PreReleased,
    /// A pre-release was promoted to a full release.
    Released,

    /// A comment on an issue was created.
    IssueCommentCreated,
    /// A comment on an issue was edited.
    IssueCommentEdited,
    /// A comment on an issue was deleted.
    IssueCommentDeleted,

    /// An issue was assigned.
    IssuesAssigned,
    /// An issue was unassigned.
    IssuesUnassigned,
    /// A label was added to an issue.
    IssuesLabeled,
    /// A label was removed from an issue.
    IssuesUnlabeled,
    /// An issue was opened.
    IssuesOpened,
    /// An issue was edited.
    IssuesEdited,
    /// An issue was added to a milestone.
    IssuesMilestoned,
    /// An issue was removed from a milestone.
    IssuesDemilestoned,
    /// An issue was closed.
    IssuesClosed,
    /// A closed issue was reopened.
    IssuesReopened,

    /// A label was created.
    LabelCreated,
    /// A label was edited.
    LabelEdited,
    /// A label was deleted.
    LabelDeleted,

    /// A milestone was created.
    MilestoneCreated,
    /// A milestone was closed.
    MilestoneClosed,
    /// A closed milestone was reopened.
    MilestoneOpened,
    /// A milestone was edited.
    MilestoneEdited,
    /// A milestone was deleted.
    MilestoneDeleted,

    /// A pull request was assigned.
    PullRequestAssigned,
    /// A pull request was unassigned.
    PullRequestUnassigned,
    /// A review was requested on a pull request.
    PullRequestReviewRequested,
    /// A review request was removed from a pull request.
    PullRequestReviewRequestRemoved,
    /// A label was added to a pull request.
    PullRequestLabeled,
    /// A label was removed from a pull request.
    PullRequestUnlabeled,
    /// A pull request was opened.
    PullRequestOpened,
    /// A pull request was edited.
    PullRequestEdited,
    /// A pull request was closed or merged.
    PullRequestClosed,
    /// A closed pull request was reopened.
    PullRequestReopened,

    /// A pull request review was submitted.
    PullRequestReviewSubmitted,
    /// A pull request review was edited.
    PullRequestReviewEdited,
    /// A pull request review was dismissed.
    PullRequestReviewDismissed,

    /// A review comment on a pull request was created.
    PullRequestReviewCommentCreated,
    /// A review comment on a pull request was edited.
    PullRequestReviewCommentEdited,
    /// A review comment on a pull request was deleted.
    PullRequestReviewCommentDeleted,
}

/// Error returned when parsing an unrecognized event kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized event kind: '{0}'")]
pub struct UnknownEventKind(pub String);

impl EventKind {
    /// Every recognized event kind, in declaration order.
    pub const ALL: &'static [EventKind] = &[
        Self::Ping,
        Self::Fork,
        Self::Push,
        Self::Create,
        Self::WatchStarted,
        Self::ReleasePublished,
        Self::ReleaseUnpublished,
        Self::ReleaseCreated,
        Self::ReleaseEdited,
        Self::ReleaseDeleted,
        Self::PreReleased,
        Self::Released,
        Self::IssueCommentCreated,
        Self::IssueCommentEdited,
        Self::IssueCommentDeleted,
        Self::IssuesAssigned,
        Self::IssuesUnassigned,
        Self::IssuesLabeled,
        Self::IssuesUnlabeled,
        Self::IssuesOpened,
        Self::IssuesEdited,
        Self::IssuesMilestoned,
        Self::IssuesDemilestoned,
        Self::IssuesClosed,
        Self::IssuesReopened,
        Self::LabelCreated,
        Self::LabelEdited,
        Self::LabelDeleted,
        Self::MilestoneCreated,
        Self::MilestoneClosed,
        Self::MilestoneOpened,
        Self::MilestoneEdited,
        Self::MilestoneDeleted,
        Self::PullRequestAssigned,
        Self::PullRequestUnassigned,
        Self::PullRequestReviewRequested,
        Self::PullRequestReviewRequestRemoved,
        Self::PullRequestLabeled,
        Self::PullRequestUnlabeled,
        Self::PullRequestOpened,
        Self::PullRequestEdited,
        Self::PullRequestClosed,
        Self::PullRequestReopened,
        Self::PullRequestReviewSubmitted,
        Self::PullRequestReviewEdited,
        Self::PullRequestReviewDismissed,
        Self::PullRequestReviewCommentCreated,
        Self::PullRequestReviewCommentEdited,
        Self::PullRequestReviewCommentDeleted,
    ];

    /// Canonical snake_case identifier for this kind.
    ///
    /// Matches the serde representation. Sorting kinds "by identifier"
    /// means lexicographic order of this string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Fork => "fork",
            Self::Push => "push",
            Self::Create => "create",
            Self::WatchStarted => "watch_started",
            Self::ReleasePublished => "release_published",
            Self::ReleaseUnpublished => "release_unpublished",
            Self::ReleaseCreated => "release_created",
            Self::ReleaseEdited => "release_edited",
            Self::ReleaseDeleted => "release_deleted",
            Self::PreReleased => "pre_released",
            Self::Released => "released",
            Self::IssueCommentCreated => "issue_comment_created",
            Self::IssueCommentEdited => "issue_comment_edited",
            Self::IssueCommentDeleted => "issue_comment_deleted",
            Self::IssuesAssigned => "issues_assigned",
            Self::IssuesUnassigned => "issues_unassigned",
            Self::IssuesLabeled => "issues_labeled",
            Self::IssuesUnlabeled => "issues_unlabeled",
            Self::IssuesOpened => "issues_opened",
            Self::IssuesEdited => "issues_edited",
            Self::IssuesMilestoned => "issues_milestoned",
            Self::IssuesDemilestoned => "issues_demilestoned",
            Self::IssuesClosed => "issues_closed",
            Self::IssuesReopened => "issues_reopened",
            Self::LabelCreated => "label_created",
            Self::LabelEdited => "label_edited",
            Self::LabelDeleted => "label_deleted",
            Self::MilestoneCreated => "milestone_created",
            Self::MilestoneClosed => "milestone_closed",
            Self::MilestoneOpened => "milestone_opened",
            Self::MilestoneEdited => "milestone_edited",
            Self::MilestoneDeleted => "milestone_deleted",
            Self::PullRequestAssigned => "pull_request_assigned",
            Self::PullRequestUnassigned => "pull_request_unassigned",
            Self::PullRequestReviewRequested => "pull_request_review_requested",
            Self::PullRequestReviewRequestRemoved => "pull_request_review_request_removed",
            Self::PullRequestLabeled => "pull_request_labeled",
            Self::PullRequestUnlabeled => "pull_request_unlabeled",
            Self::PullRequestOpened => "pull_request_opened",
            Self::PullRequestEdited => "pull_request_edited",
            Self::PullRequestClosed => "pull_request_closed",
            Self::PullRequestReopened => "pull_request_reopened",
            Self::PullRequestReviewSubmitted => "pull_request_review_submitted",
            Self::PullRequestReviewEdited => "pull_request_review_edited",
            Self::PullRequestReviewDismissed => "pull_request_review_dismissed",
            Self::PullRequestReviewCommentCreated => "pull_request_review_comment_created",
            Self::PullRequestReviewCommentEdited => "pull_request_review_comment_edited",
            Self::PullRequestReviewCommentDeleted => "pull_request_review_comment_deleted",
        }
    }

    /// Handler method name used by consumer services, e.g. `onPush`.
    ///
    /// Services that expose their capability set as a list of method names
    /// use this form. See [`EventKind::from_handler_name`] for the reverse
    /// mapping.
    pub const fn handler_name(self) -> &'static str {
        match self {
            Self::Ping => "onPing",
            Self::Fork => "onFork",
            Self::Push => "onPush",
            Self::Create => "onCreate",
            Self::WatchStarted => "onWatchStarted",
            Self::ReleasePublished => "onReleasePublished",
            Self::ReleaseUnpublished => "onReleaseUnpublished",
            Self::ReleaseCreated => "onReleaseCreated",
            Self::ReleaseEdited => "onReleaseEdited",
            Self::ReleaseDeleted => "onReleaseDeleted",
            Self::PreReleased => "onPreReleased",
            Self::Released => "onReleased",
            Self::IssueCommentCreated => "onIssueCommentCreated",
            Self::IssueCommentEdited => "onIssueCommentEdited",
            Self::IssueCommentDeleted => "onIssueCommentDeleted",
            Self::IssuesAssigned => "onIssuesAssigned",
            Self::IssuesUnassigned => "onIssuesUnassigned",
            Self::IssuesLabeled => "onIssuesLabeled",
            Self::IssuesUnlabeled => "onIssuesUnlabeled",
            Self::IssuesOpened => "onIssuesOpened",
            Self::IssuesEdited => "onIssuesEdited",
            Self::IssuesMilestoned => "onIssuesMilestoned",
            Self::IssuesDemilestoned => "onIssuesDemilestoned",
            Self::IssuesClosed => "onIssuesClosed",
            Self::IssuesReopened => "onIssuesReopened",
            Self::LabelCreated => "onLabelCreated",
            Self::LabelEdited => "onLabelEdited",
            Self::LabelDeleted => "onLabelDeleted",
            Self::MilestoneCreated => "onMilestoneCreated",
            Self::MilestoneClosed => "onMilestoneClosed",
            Self::MilestoneOpened => "onMilestoneOpened",
            Self::MilestoneEdited => "onMilestoneEdited",
            Self::MilestoneDeleted => "onMilestoneDeleted",
            Self::PullRequestAssigned => "onPullRequestAssigned",
            Self::PullRequestUnassigned => "onPullRequestUnassigned",
            Self::PullRequestReviewRequested => "onPullRequestReviewRequested",
            Self::PullRequestReviewRequestRemoved => "onPullRequestReviewRequestRemoved",
            Self::PullRequestLabeled => "onPullRequestLabeled",
            Self::PullRequestUnlabeled => "onPullRequestUnlabeled",
            Self::PullRequestOpened => "onPullRequestOpened",
            Self::PullRequestEdited => "onPullRequestEdited",
            Self::PullRequestClosed => "onPullRequestClosed",
            Self::PullRequestReopened => "onPullRequestReopened",
            Self::PullRequestReviewSubmitted => "onPullRequestReviewSubmitted",
            Self::PullRequestReviewEdited => "onPullRequestReviewEdited",
            Self::PullRequestReviewDismissed => "onPullRequestReviewDismissed",
            Self::PullRequestReviewCommentCreated => "onPullRequestReviewCommentCreated",
            Self::PullRequestReviewCommentEdited => "onPullRequestReviewCommentEdited",
            Self::PullRequestReviewCommentDeleted => "onPullRequestReviewCommentDeleted",
        }
    }

    /// Resolves a handler method name back to its event kind.
    pub fn from_handler_name(name: &str) -> Result<Self, UnknownEventKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.handler_name() == name)
            .ok_or_else(|| UnknownEventKind(name.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}
