use rusqlite::{Connection, params};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::idea::{IdeaCategory, IdeaStatus};
use crate::models::reward;
use crate::models::user::Role;

/// One idea's contribution to the aggregates.
#[derive(Debug, Clone, Copy)]
pub struct IdeaStatRow {
    pub category: IdeaCategory,
    pub status: IdeaStatus,
}

/// Category and status partition counts with percentage-of-total figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaStats {
    pub total_idea_count: i64,
    pub innovations_count: i64,
    pub productivity_count: i64,
    pub cost_saving_count: i64,
    pub submitted_count: i64,
    pub inprogress_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    pub innovation_percentage: String,
    pub cost_saving_percentage: String,
    pub productivity_percentage: String,
    pub submitted_percentage: String,
    pub inprogress_percentage: String,
    pub approved_percentage: String,
    pub rejected_percentage: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    #[serde(flatten)]
    pub ideas: IdeaStats,
    pub total_user: i64,
    pub employee_count: i64,
    pub innovation_manager_count: i64,
    pub decision_manager_count: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    #[serde(flatten)]
    pub ideas: IdeaStats,
    pub reward_points: i64,
}

fn percentage(count: i64, total: i64) -> String {
    format!("{:.2}", (count as f64 / total as f64) * 100.0)
}

/// Pure reducer over idea rows. An empty slice reports a total of 1 with
/// all-zero counts, keeping every percentage at 0.00 without dividing by
/// zero.
pub fn summarize(rows: &[IdeaStatRow]) -> IdeaStats {
    let count_category =
        |c: IdeaCategory| rows.iter().filter(|r| r.category == c).count() as i64;
    let count_status = |s: IdeaStatus| rows.iter().filter(|r| r.status == s).count() as i64;

    let innovations = count_category(IdeaCategory::Innovation);
    let cost_saving = count_category(IdeaCategory::CostSaving);
    let productivity = count_category(IdeaCategory::Productivity);
    let submitted = count_status(IdeaStatus::Submitted);
    let inprogress = count_status(IdeaStatus::InProgress);
    let approved = count_status(IdeaStatus::Approved);
    let rejected = count_status(IdeaStatus::Rejected);

    let total = (rows.len() as i64).max(1);

    IdeaStats {
        total_idea_count: total,
        innovations_count: innovations,
        productivity_count: productivity,
        cost_saving_count: cost_saving,
        submitted_count: submitted,
        inprogress_count: inprogress,
        approved_count: approved,
        rejected_count: rejected,
        innovation_percentage: percentage(innovations, total),
        cost_saving_percentage: percentage(cost_saving, total),
        productivity_percentage: percentage(productivity, total),
        submitted_percentage: percentage(submitted, total),
        inprogress_percentage: percentage(inprogress, total),
        approved_percentage: percentage(approved, total),
        rejected_percentage: percentage(rejected, total),
    }
}

pub fn idea_stat_rows(conn: &Connection) -> rusqlite::Result<Vec<IdeaStatRow>> {
    let mut stmt = conn.prepare("SELECT category, status FROM ideas")?;
    stmt.query_map([], |row| {
        let category: String = row.get(0)?;
        let status: String = row.get(1)?;
        Ok(IdeaStatRow {
            category: IdeaCategory::parse(&category).unwrap_or(IdeaCategory::Innovation),
            status: IdeaStatus::parse(&status).unwrap_or(IdeaStatus::Submitted),
        })
    })?
    .collect()
}

pub fn idea_stat_rows_for_submitter(
    conn: &Connection,
    user_id: i64,
) -> rusqlite::Result<Vec<IdeaStatRow>> {
    let mut stmt = conn.prepare("SELECT category, status FROM ideas WHERE submitted_by = ?1")?;
    stmt.query_map(params![user_id], |row| {
        let category: String = row.get(0)?;
        let status: String = row.get(1)?;
        Ok(IdeaStatRow {
            category: IdeaCategory::parse(&category).unwrap_or(IdeaCategory::Innovation),
            status: IdeaStatus::parse(&status).unwrap_or(IdeaStatus::Submitted),
        })
    })?
    .collect()
}

/// Aggregate view over every idea and user. Recomputed fully on each call.
pub fn overall(conn: &Connection) -> Result<OverallStats, AppError> {
    let rows = idea_stat_rows(conn)?;
    let ideas = summarize(&rows);

    Ok(OverallStats {
        ideas,
        total_user: crate::models::user::count(conn)?,
        employee_count: crate::models::user::count_by_role(conn, Role::Employee)?,
        innovation_manager_count: crate::models::user::count_by_role(
            conn,
            Role::InnovationManager,
        )?,
        decision_manager_count: crate::models::user::count_by_role(conn, Role::DecisionMaker)?,
    })
}

/// Per-submitter view plus the summed reward ledger for that user.
pub fn for_employee(conn: &Connection, employee_id: i64) -> Result<EmployeeStats, AppError> {
    let rows = idea_stat_rows_for_submitter(conn, employee_id)?;
    let ideas = summarize(&rows);
    let reward_points = reward::total_points_for_user(conn, employee_id)?;

    Ok(EmployeeStats { ideas, reward_points })
}
