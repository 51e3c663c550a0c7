use log::info;

use super::Store;
use crate::error::{StoreError, StoreResult};
use crate::forms::NewEmployee;
use crate::model::Employee;

impl Store {
    pub async fn insert_employee(&self, employee: &NewEmployee) -> StoreResult<()> {
        sqlx::query("INSERT INTO employee (ssn, tin, bdate, name) VALUES (?, ?, ?, ?)")
            .bind(&employee.ssn)
            .bind(&employee.tin)
            .bind(employee.bdate)
            .bind(&employee.name)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::on_insert(e, "SSN"))?;

        info!("created employee {}", employee.ssn);
        Ok(())
    }

    pub async fn find_employee(&self, ssn: &str) -> StoreResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT ssn, tin, bdate, name FROM employee WHERE ssn = ?",
        )
        .bind(ssn)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }
}
