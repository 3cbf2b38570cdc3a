use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{Course, CourseFilter, NewCourseRequest, UpdateCourseRequest};

/// Rows come back in insertion order so list positions are stable
/// across calls, filtered or not.
pub async fn fetch_courses(
    db: &SqlitePool,
    filter: &CourseFilter,
) -> Result<Vec<Course>, sqlx::Error> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT id, name FROM courses");

    let mut prefix = " WHERE ";
    if let Some(id) = filter.id {
        query.push(prefix).push("id = ").push_bind(id);
        prefix = " AND ";
    }
    if let Some(name) = &filter.name {
        query.push(prefix).push("name = ").push_bind(name);
    }
    query.push(" ORDER BY id");

    query.build_query_as::<Course>().fetch_all(db).await
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>("SELECT id, name FROM courses WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn insert_course(db: &SqlitePool, req: NewCourseRequest) -> Result<Course, sqlx::Error> {
    sqlx::query_as::<_, Course>("INSERT INTO courses (name) VALUES (?) RETURNING id, name")
        .bind(&req.name)
        .fetch_one(db)
        .await
}

/// Applies the supplied fields to an existing row. Returns `None` when the
/// row does not exist; omitted fields keep their current values.
pub async fn update_course(
    db: &SqlitePool,
    id: i64,
    req: UpdateCourseRequest,
) -> Result<Option<Course>, sqlx::Error> {
    let mut current = match find_course_by_id(db, id).await? {
        Some(course) => course,
        None => return Ok(None),
    };

    if let Some(name) = req.name {
        current.name = name;
    }

    sqlx::query("UPDATE courses SET name = ? WHERE id = ?")
        .bind(&current.name)
        .bind(id)
        .execute(db)
        .await?;

    Ok(Some(current))
}

pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
