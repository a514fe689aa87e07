use domain::models::{PartialStudent, Student};
use shared::{Page, QueryFilter};
use wire::records::{map_single_student_response, map_students_page, prepare_student_for_backend};
use wire::try_extract_api_data;

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::filters::StudentFilters;

pub const STUDENTS_PATH: &str = "/api/students";

impl OgsClient {
    /// One page of students. Unpaginated backends yield a page without
    /// pagination metadata.
    pub async fn list_students(&self, filters: &StudentFilters) -> Result<Page<Student>, ApiError> {
        let response = self
            .transport()
            .get(STUDENTS_PATH, &filters.to_query_string())
            .await?;
        Ok(map_students_page(response)?)
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        let path = resource_path(STUDENTS_PATH, id)?;
        let response = self.transport().get(&path, "").await?;
        Ok(map_single_student_response(response)?)
    }

    pub async fn create_student(&self, student: &PartialStudent) -> Result<Student, ApiError> {
        let payload = prepare_student_for_backend(validated(student)?)?;
        let response = self
            .transport()
            .post(STUDENTS_PATH, to_body(&payload)?)
            .await?;
        let created = map_single_student_response(response)?;

        tracing::info!(student_id = %created.id, "Student created");
        Ok(created)
    }

    pub async fn update_student(
        &self,
        id: &str,
        student: &PartialStudent,
    ) -> Result<Student, ApiError> {
        let path = resource_path(STUDENTS_PATH, id)?;
        let payload = prepare_student_for_backend(validated(student)?)?;
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        Ok(map_single_student_response(response)?)
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let path = resource_path(STUDENTS_PATH, id)?;
        try_extract_api_data(self.transport().delete(&path).await?)?;

        tracing::info!(student_id = %id, "Student deleted");
        Ok(())
    }
}
