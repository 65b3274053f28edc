//! Built-in artifact templates. Content is fixed at compile time and written
//! verbatim; the generator never substitutes variables into these bodies.

use crate::domain::model::Artifact;

pub const CONFIG_YAML: &str = "\
app:
  name: ai-service
  host: 0.0.0.0
  port: 8000
  debug: false
  workers: 4

database:
  host: db
  port: 5432
  name: ai_service
  pool_size: 10

cache:
  host: redis
  port: 6379
  ttl_seconds: 3600

models:
  provider: openai
  default: gpt-4o-mini
  max_tokens: 2048
  temperature: 0.7

logging:
  level: info
  format: json
";

pub const DOCKER_COMPOSE_YML: &str = "\
services:
  web:
    build: .
    ports:
      - \"8000:8000\"
    env_file:
      - .env
    depends_on:
      - db
      - redis
    restart: unless-stopped

  db:
    image: postgres:16-alpine
    environment:
      POSTGRES_DB: ai_service
      POSTGRES_USER: ${POSTGRES_USER}
      POSTGRES_PASSWORD: ${POSTGRES_PASSWORD}
    volumes:
      - pgdata:/var/lib/postgresql/data
    restart: unless-stopped

  redis:
    image: redis:7-alpine
    restart: unless-stopped

volumes:
  pgdata:
";

pub const DOCKERFILE: &str = "\
FROM python:3.11-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD [\"uvicorn\", \"app.main:app\", \"--host\", \"0.0.0.0\", \"--port\", \"8000\"]
";

pub const ENV_EXAMPLE: &str = "\
# Application
APP_ENV=development
SECRET_KEY=change-me

# Database
POSTGRES_USER=ai_service
POSTGRES_PASSWORD=change-me
DATABASE_URL=postgresql://ai_service:change-me@db:5432/ai_service

# Cache
REDIS_URL=redis://redis:6379/0

# Model providers
OPENAI_API_KEY=
ANTHROPIC_API_KEY=
";

pub const DOCKERIGNORE: &str = "\
.git
.env
__pycache__/
*.pyc
.venv/
.pytest_cache/
.mypy_cache/
";

/// Names of every built-in artifact, in emission order.
pub const ARTIFACT_NAMES: [&str; 5] = [
    "config.yaml",
    "docker-compose.yml",
    "Dockerfile",
    ".env.example",
    ".dockerignore",
];

pub fn builtin_artifacts() -> Vec<Artifact> {
    vec![
        Artifact::new("config.yaml", CONFIG_YAML),
        Artifact::new("docker-compose.yml", DOCKER_COMPOSE_YML),
        Artifact::new("Dockerfile", DOCKERFILE),
        Artifact::new(".env.example", ENV_EXAMPLE),
        Artifact::new(".dockerignore", DOCKERIGNORE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_artifacts_match_declared_names() {
        let artifacts = builtin_artifacts();
        assert_eq!(artifacts.len(), ARTIFACT_NAMES.len());
        for (artifact, name) in artifacts.iter().zip(ARTIFACT_NAMES.iter()) {
            assert_eq!(artifact.filename, *name);
        }
    }

    #[test]
    fn test_filenames_are_unique() {
        let names: HashSet<&str> = ARTIFACT_NAMES.iter().copied().collect();
        assert_eq!(names.len(), ARTIFACT_NAMES.len());
    }

    #[test]
    fn test_templates_are_non_empty_and_newline_terminated() {
        for artifact in builtin_artifacts() {
            assert!(!artifact.content.is_empty(), "{} is empty", artifact.filename);
            assert!(
                artifact.content.ends_with('\n'),
                "{} lacks trailing newline",
                artifact.filename
            );
        }
    }

    #[test]
    fn test_env_example_documents_core_variables() {
        assert!(ENV_EXAMPLE.contains("DATABASE_URL="));
        assert!(ENV_EXAMPLE.contains("REDIS_URL="));
        assert!(ENV_EXAMPLE.contains("OPENAI_API_KEY="));
    }
}
