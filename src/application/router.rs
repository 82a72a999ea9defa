//! View router — the screen-selection state machine
//!
//! One router instance per signed-in session; sign-out tears it down
//! and the next session starts a fresh one at the dashboard. Refused
//! transitions leave the router exactly where it was; the caller
//! presents the denial, the router has no error state of its own.

use crate::domain::policy::{self, Action};
use crate::domain::{DomainResult, Identity, Role};

use super::roster::RosterService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    List,
    Create,
    Detail,
    Edit,
    OwnProfile,
}

/// Explicit user intents; the only thing that drives transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    NavigateDashboard,
    NavigateList,
    NavigateCreate,
    SelectRecord(String),
    RequestEdit(String),
    OpenOwnProfile,
    SubmitSuccess,
    Cancel,
}

#[derive(Debug)]
pub struct ViewRouter {
    view: View,
    selected_employee_id: Option<String>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Dashboard,
            selected_employee_id: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_employee_id(&self) -> Option<&str> {
        self.selected_employee_id.as_deref()
    }

    /// Apply a user intent. Policy-gated transitions return
    /// `PermissionDenied` without moving; the new view is returned on
    /// success.
    pub async fn apply(
        &mut self,
        intent: Intent,
        actor: &Identity,
        roster: &RosterService,
    ) -> DomainResult<View> {
        match intent {
            Intent::NavigateDashboard => self.enter_dashboard(actor, roster).await?,
            Intent::NavigateList => {
                policy::check(actor.role, Action::ViewAllEmployees)?;
                self.view = View::List;
                self.selected_employee_id = None;
            }
            Intent::NavigateCreate => {
                policy::check(actor.role, Action::CreateEmployee)?;
                self.view = View::Create;
                self.selected_employee_id = None;
            }
            Intent::SelectRecord(id) => {
                policy::check(actor.role, Action::ViewEmployeeDetail)?;
                self.selected_employee_id = Some(id);
                self.view = View::Detail;
            }
            Intent::RequestEdit(id) => {
                policy::check(actor.role, Action::EditEmployee)?;
                self.selected_employee_id = Some(id);
                self.view = View::Edit;
            }
            Intent::OpenOwnProfile => {
                policy::check(actor.role, Action::ViewOwnProfile)?;
                // Selection may stay empty; the caller renders the
                // "profile not found" affordance.
                self.selected_employee_id =
                    roster.my_record(actor).await?.map(|employee| employee.id);
                self.view = View::OwnProfile;
            }
            Intent::SubmitSuccess | Intent::Cancel => match self.view {
                View::Create | View::Edit | View::Detail => {
                    self.view = View::List;
                    self.selected_employee_id = None;
                }
                View::OwnProfile => self.enter_dashboard(actor, roster).await?,
                View::Dashboard | View::List => {}
            },
        }
        Ok(self.view)
    }

    /// Dashboard entry resolves the employee's own record once, here,
    /// rather than recomputing it on every render pass.
    async fn enter_dashboard(
        &mut self,
        actor: &Identity,
        roster: &RosterService,
    ) -> DomainResult<()> {
        self.selected_employee_id = if actor.role == Role::Employee {
            roster.my_record(actor).await?.map(|employee| employee.id)
        } else {
            None
        };
        self.view = View::Dashboard;
        Ok(())
    }
}
