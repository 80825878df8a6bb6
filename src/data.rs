//! The skill catalogue shown on the home page.
//!
//! Connections are declared from one side only where the other side would be
//! redundant; the graph treats every declaration as symmetric.

use crate::components::skill_graph::SkillCategory::*;
use crate::components::skill_graph::SkillNode;

pub fn skills() -> Vec<SkillNode> {
	vec![
		// Languages
		SkillNode::new("go", "Go", 5, Languages, &["postgresql", "mysql", "caddy", "kubernetes"]),
		SkillNode::new("typescript", "TypeScript", 5, Languages, &["react", "nextjs", "nodejs"]),
		SkillNode::new("javascript", "JavaScript", 5, Languages, &["nodejs", "react"]),
		SkillNode::new(
			"python",
			"Python",
			5,
			Languages,
			&["ansible", "aws", "mlflow", "dvc", "great_expectations"],
		),
		SkillNode::new("java", "Java", 4, Languages, &["jenkins", "kubernetes"]),
		SkillNode::new("sql", "SQL", 4, Languages, &["postgresql", "mysql"]),
		// Frontend
		SkillNode::new("react", "React", 5, Frontend, &["nextjs", "typescript"]),
		SkillNode::new("nextjs", "Next.js", 5, Frontend, &["react", "typescript"]),
		SkillNode::new("tailwind", "Tailwind CSS", 5, Frontend, &["react", "nextjs"]),
		// Backend
		SkillNode::new("nodejs", "Node.js", 5, Backend, &["express", "mongodb", "typescript", "nats"]),
		SkillNode::new("express", "Express", 4, Backend, &["nodejs", "mongodb"]),
		SkillNode::new("postgresql", "PostgreSQL", 5, Backend, &["go", "nodejs", "kubernetes"]),
		SkillNode::new("mysql", "MySQL", 4, Backend, &["go"]),
		SkillNode::new("mongodb", "MongoDB", 4, Backend, &["nodejs", "express"]),
		SkillNode::new("caddy", "Caddy", 4, Backend, &["go"]),
		SkillNode::new("nats", "NATS Streaming", 4, Backend, &["nodejs", "kubernetes"]),
		// DevOps
		SkillNode::new("docker", "Docker", 5, Devops, &["kubernetes", "jenkins", "gitlab", "mlflow"]),
		SkillNode::new(
			"kubernetes",
			"Kubernetes",
			5,
			Devops,
			&["docker", "helm", "argo", "terraform", "ansible", "prometheus"],
		),
		SkillNode::new("jenkins", "Jenkins", 5, Devops, &["docker", "kubernetes", "terraform", "java"]),
		SkillNode::new("terraform", "Terraform", 5, Devops, &["aws", "kubernetes", "ansible", "jenkins"]),
		SkillNode::new("ansible", "Ansible", 4, Devops, &["kubernetes", "terraform", "python"]),
		SkillNode::new("helm", "Helm", 4, Devops, &["kubernetes"]),
		SkillNode::new("argo", "ArgoCD", 4, Devops, &["kubernetes", "gitlab"]),
		SkillNode::new("gitlab", "GitLab CI", 4, Devops, &["docker", "argo"]),
		SkillNode::new("git", "Git", 5, Devops, &["gitlab", "jenkins", "dvc"]),
		SkillNode::new("postman", "Postman", 4, Devops, &[]),
		// Cloud
		SkillNode::new("aws", "AWS", 5, Cloud, &["terraform", "kubernetes", "python"]),
		// Security
		SkillNode::new("semgrep", "Semgrep", 4, Security, &["gitlab"]),
		SkillNode::new("zap", "OWASP ZAP", 4, Security, &["gitlab"]),
		SkillNode::new("trivy", "Trivy", 4, Security, &["docker", "gitlab"]),
		// Monitoring
		SkillNode::new("prometheus", "Prometheus", 4, Monitoring, &["kubernetes", "grafana"]),
		SkillNode::new("grafana", "Grafana", 4, Monitoring, &["prometheus", "kubernetes"]),
		// MLOps
		SkillNode::new("mlflow", "MLflow", 4, Mlops, &["python", "docker"]),
		SkillNode::new("dvc", "DVC", 4, Mlops, &["python", "git"]),
		SkillNode::new("great_expectations", "Great Expectations", 4, Mlops, &["python"]),
		SkillNode::new("shell", "Shell", 4, Mlops, &["python", "docker"]),
	]
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn ids_are_unique_and_connections_resolve() {
		let skills = skills();
		let ids: HashSet<&str> = skills.iter().map(|s| s.id.as_str()).collect();
		assert_eq!(ids.len(), skills.len());
		for skill in &skills {
			for target in &skill.connections {
				assert!(ids.contains(target.as_str()), "{} -> {}", skill.id, target);
			}
		}
	}

	#[test]
	fn kubernetes_is_reached_mostly_by_incoming_declarations() {
		let skills = skills();
		let incoming = skills
			.iter()
			.filter(|s| s.connections.iter().any(|c| c == "kubernetes"))
			.count();
		assert!(incoming > 6);
	}
}
