//! SurrealDB implementation of [`StudyGroupRepository`].

use chrono::{DateTime, Utc};
use studygroup_core::error::StudyGroupResult;
use studygroup_core::models::study_group::{SortingOrder, StudyGroup, StudyGroupId, Subject};
use studygroup_core::models::user::{User, UserId};
use studygroup_core::repository::StudyGroupRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::{debug, info};

use crate::error::DbError;

/// Table name, also the key of the table's id sequence record.
const TABLE: &str = "study_group";

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct StudyGroupRow {
    record_id: i64,
    name: String,
    subject: String,
    create_date: DateTime<Utc>,
    members: Vec<i64>,
}

impl StudyGroupRow {
    fn try_into_study_group(self) -> Result<StudyGroup, DbError> {
        let subject = self
            .subject
            .parse::<Subject>()
            .map_err(|e| DbError::Corrupt(format!("study_group:{}: {e}", self.record_id)))?;
        let members = self.members.into_iter().map(User::new).collect();
        StudyGroup::new(self.record_id, self.name, subject, self.create_date, members)
            .map_err(|e| DbError::Corrupt(format!("study_group:{}: {e}", self.record_id)))
    }
}

/// Row struct for the id sequence.
#[derive(Debug, SurrealValue)]
struct SequenceRow {
    value: i64,
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

fn member_ids(group: &StudyGroup) -> Vec<i64> {
    group.members().iter().map(|m| m.id).collect()
}

fn order_keyword(order: SortingOrder) -> &'static str {
    match order {
        SortingOrder::Ascending => "ASC",
        SortingOrder::Descending => "DESC",
    }
}

/// SurrealDB implementation of the StudyGroup repository.
#[derive(Clone)]
pub struct SurrealStudyGroupRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealStudyGroupRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Allocate the next integer id for a study group.
    async fn next_id(&self) -> Result<StudyGroupId, DbError> {
        let result = self
            .db
            .query(
                "UPSERT type::record('sequence', $table) \
                 SET value += 1 RETURN AFTER",
            )
            .bind(("table", TABLE))
            .await?;
        let mut result = result.check()?;

        let rows: Vec<SequenceRow> = result.take(0)?;
        rows.into_iter()
            .next()
            .map(|row| row.value)
            .ok_or_else(|| DbError::NotFound {
                entity: "sequence".into(),
                id: TABLE.into(),
            })
    }

    /// Overwrite the stored member list with the group's current one.
    async fn save_members(&self, group: &StudyGroup) -> Result<(), DbError> {
        self.db
            .query("UPDATE type::record('study_group', $id) SET members = $members")
            .bind(("id", group.id()))
            .bind(("members", member_ids(group)))
            .await?
            .check()?;
        Ok(())
    }
}

impl<C: Connection> StudyGroupRepository for SurrealStudyGroupRepository<C> {
    async fn create_study_group(&self, group: StudyGroup) -> StudyGroupResult<StudyGroup> {
        let id = self.next_id().await?;

        self.db
            .query(
                "CREATE type::record('study_group', $id) SET \
                 name = $name, subject = $subject, \
                 create_date = $create_date, members = $members",
            )
            .bind(("id", id))
            .bind(("name", group.name().to_owned()))
            .bind(("subject", group.subject().as_str()))
            .bind(("create_date", group.create_date()))
            .bind(("members", member_ids(&group)))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(DbError::from)?;

        debug!(id, name = %group.name(), subject = %group.subject(), "Inserted study group");

        Ok(group.with_id(id))
    }

    async fn get_study_groups(&self) -> StudyGroupResult<Vec<StudyGroup>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM study_group \
                 ORDER BY record_id ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<StudyGroupRow> = result.take(0).map_err(DbError::from)?;

        let groups = rows
            .into_iter()
            .map(|row| row.try_into_study_group())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(groups)
    }

    async fn get_study_group(&self, id: StudyGroupId) -> StudyGroupResult<StudyGroup> {
        let mut result = self
            .db
            .query("SELECT meta::id(id) AS record_id, * FROM type::record('study_group', $id)")
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<StudyGroupRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: TABLE.into(),
            id: id.to_string(),
        })?;

        Ok(row.try_into_study_group()?)
    }

    async fn search_study_groups(
        &self,
        filter: &str,
        order: SortingOrder,
    ) -> StudyGroupResult<Vec<StudyGroup>> {
        debug!(filter, %order, "Searching study groups");

        let query = format!(
            "SELECT meta::id(id) AS record_id, * FROM study_group \
             WHERE string::contains(name, $filter) \
             OR string::contains(subject, $filter) \
             ORDER BY create_date {}, record_id ASC",
            order_keyword(order)
        );

        let mut result = self
            .db
            .query(query)
            .bind(("filter", filter.to_owned()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<StudyGroupRow> = result.take(0).map_err(DbError::from)?;

        let groups = rows
            .into_iter()
            .map(|row| row.try_into_study_group())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(groups)
    }

    async fn join_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> StudyGroupResult<()> {
        let mut group = self.get_study_group(group_id).await?;
        group.add_member(User::new(user_id));
        self.save_members(&group).await?;

        info!(group_id, user_id, "User joined study group");
        Ok(())
    }

    async fn leave_study_group(
        &self,
        group_id: StudyGroupId,
        user_id: UserId,
    ) -> StudyGroupResult<()> {
        let mut group = self.get_study_group(group_id).await?;
        group.remove_member(&User::new(user_id));
        self.save_members(&group).await?;

        info!(group_id, user_id, "User left study group");
        Ok(())
    }

    async fn user_has_group_for_subject(
        &self,
        user_id: UserId,
        subject: Subject,
    ) -> StudyGroupResult<bool> {
        let mut result = self
            .db
            .query(
                "SELECT count() AS total FROM study_group \
                 WHERE subject = $subject AND members CONTAINS $user_id \
                 GROUP ALL",
            )
            .bind(("subject", subject.as_str()))
            .bind(("user_id", user_id))
            .await
            .map_err(DbError::from)?;

        let count_rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(count_rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }
}
