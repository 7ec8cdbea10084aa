//! 演示数据
//!
//! 通过 `Storage` 写入固定的教授、课程、开课实例与授课关系，可选写入两位演示学生的评分。
//! 集成测试复用同一份数据。

use std::collections::HashMap;

use tracing::{debug, info};

use crate::errors::{RatingsError, Result};
use crate::models::catalog::requests::{
    CreateModuleInstanceRequest, CreateModuleRequest, CreateProfessorRequest,
};
use crate::models::ratings::requests::CreateRatingRequest;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;

// (代码, 姓名)
const PROFESSORS: &[(&str, &str)] = &[
    ("RR", "Roy Ruddle"),
    ("JS", "John Stell"),
    ("AA", "Ammar Alsalka"),
    ("OJ", "Owen Johnson"),
];

// (代码, 名称)
const MODULES: &[(&str, &str)] = &[
    ("IV", "Info Vis"),
    ("DV", "Data Vis"),
    ("WS", "Web Services"),
];

// (课程代码, 学年, 学期)
const INSTANCES: &[(&str, i32, i32)] = &[
    ("IV", 2024, 1),
    ("IV", 2023, 1),
    ("DV", 2024, 2),
    ("WS", 2024, 2),
];

// (教授代码, 课程代码, 学年, 学期)
const ASSIGNMENTS: &[(&str, &str, i32, i32)] = &[
    ("RR", "IV", 2024, 1),
    ("RR", "IV", 2023, 1),
    ("OJ", "IV", 2024, 1),
    ("RR", "DV", 2024, 2),
    ("AA", "WS", 2024, 2),
];

// (用户名, 邮箱)
const DEMO_USERS: &[(&str, &str)] = &[
    ("demo_student_1", "demo_student_1@example.com"),
    ("demo_student_2", "demo_student_2@example.com"),
];

// (DEMO_USERS 下标, 教授代码, 课程代码, 学年, 学期, 评分)
const DEMO_RATINGS: &[(usize, &str, &str, i32, i32, i32)] = &[
    (0, "RR", "IV", 2024, 1, 1),
    (0, "RR", "IV", 2023, 1, 3),
    (1, "RR", "DV", 2024, 2, 5),
];

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 写入演示数据，已有教授时跳过并返回 false
pub async fn seed_demo_data(storage: &dyn Storage, with_ratings: bool) -> Result<bool> {
    let existing = storage.count_professors().await?;
    if existing > 0 {
        debug!(
            "Database already has {} professor(s), skipping demo seed",
            existing
        );
        return Ok(false);
    }

    info!("Seeding demo professors, modules and module instances...");

    let mut professor_ids = HashMap::new();
    for (code, name) in PROFESSORS {
        let professor = storage
            .create_professor(CreateProfessorRequest {
                code: code.to_string(),
                name: name.to_string(),
            })
            .await?;
        professor_ids.insert(*code, professor.id);
    }

    let mut module_ids = HashMap::new();
    for (code, name) in MODULES {
        let module = storage
            .create_module(CreateModuleRequest {
                code: code.to_string(),
                name: name.to_string(),
            })
            .await?;
        module_ids.insert(*code, module.id);
    }

    let mut instance_ids = HashMap::new();
    for &(module_code, year, semester) in INSTANCES {
        let module_id = lookup(&module_ids, module_code)?;
        let instance = storage
            .create_module_instance(CreateModuleInstanceRequest {
                module_id,
                year,
                semester,
            })
            .await?;
        instance_ids.insert((module_code, year, semester), instance.id);
    }

    let mut assignment_ids = HashMap::new();
    for &(professor_code, module_code, year, semester) in ASSIGNMENTS {
        let instance_id = instance_ids
            .get(&(module_code, year, semester))
            .copied()
            .ok_or_else(|| {
                RatingsError::validation(format!(
                    "Unknown demo module instance {module_code} {year}/{semester}"
                ))
            })?;
        let professor_id = lookup(&professor_ids, professor_code)?;
        let assignment = storage.assign_professor(instance_id, professor_id).await?;
        assignment_ids.insert((professor_code, module_code, year, semester), assignment.id);
    }

    if with_ratings {
        let mut user_ids = Vec::with_capacity(DEMO_USERS.len());
        for (username, email) in DEMO_USERS {
            let user = storage
                .create_user(CreateUserRequest {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: hash_password(&generate_random_password(16))?,
                })
                .await?;
            user_ids.push(user.id);
        }

        for &(user_index, professor_code, module_code, year, semester, rating) in DEMO_RATINGS {
            let module_instance_professor_id = assignment_ids
                .get(&(professor_code, module_code, year, semester))
                .copied()
                .ok_or_else(|| {
                    RatingsError::validation(format!(
                        "Unknown demo assignment {professor_code} {module_code} {year}/{semester}"
                    ))
                })?;
            storage
                .create_rating(CreateRatingRequest {
                    user_id: user_ids[user_index],
                    module_instance_professor_id,
                    rating,
                })
                .await?;
        }
    }

    info!(
        "Demo data seeded: {} professors, {} modules, {} instances, {} assignments, {} ratings",
        PROFESSORS.len(),
        MODULES.len(),
        INSTANCES.len(),
        ASSIGNMENTS.len(),
        if with_ratings { DEMO_RATINGS.len() } else { 0 }
    );
    Ok(true)
}

fn lookup(ids: &HashMap<&str, i64>, code: &str) -> Result<i64> {
    ids.get(code)
        .copied()
        .ok_or_else(|| RatingsError::validation(format!("Unknown demo code {code}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_password() {
        let password = generate_random_password(16);
        assert_eq!(password.len(), 16);
        assert_ne!(password, generate_random_password(16));
    }

    #[test]
    fn test_fixture_references_are_consistent() {
        for (professor, module, year, semester) in ASSIGNMENTS {
            assert!(PROFESSORS.iter().any(|(code, _)| code == professor));
            assert!(INSTANCES.contains(&(*module, *year, *semester)));
        }
        for (user, professor, module, year, semester, rating) in DEMO_RATINGS {
            assert!(*user < DEMO_USERS.len());
            assert!(ASSIGNMENTS.contains(&(*professor, *module, *year, *semester)));
            assert!((1..=100).contains(rating));
        }
    }
}
