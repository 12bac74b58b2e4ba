use crate::models::application::{Application, Status};

/// One dashboard column: a status and its applications in server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColumn {
    pub status: Status,
    pub applications: Vec<Application>,
}

/// Partitions `applications` into one column per entry of `statuses`, in that order.
///
/// Relative server order is preserved inside each column. Applications whose
/// status is not listed land in no column.
pub fn group_by_status(applications: &[Application], statuses: &[Status]) -> Vec<StatusColumn> {
    let mut columns: Vec<StatusColumn> = statuses
        .iter()
        .map(|&status| StatusColumn {
            status,
            applications: Vec::new(),
        })
        .collect();

    for app in applications {
        let Some(status) = app.known_status() else {
            continue;
        };
        if let Some(column) = columns.iter_mut().find(|c| c.status == status) {
            column.applications.push(app.clone());
        }
    }

    columns
}
