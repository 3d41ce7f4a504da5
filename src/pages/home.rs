use leptos::prelude::*;

use crate::components::config_tabs::{ConfigEntry, ConfigTabs};
use crate::components::pipeline_diagram::{ColorStops, DiagramData, PipelineDiagram, StageNode};

/// The six stages of the GitOps flow, code to cluster.
fn pipeline_stages() -> DiagramData {
	let stage = |label: &str, caption: &str, icon: &str, accent: &str| StageNode {
		label: label.into(),
		caption: caption.into(),
		icon: icon.into(),
		accent: accent.into(),
	};
	let stops = |from: &str, to: &str| ColorStops {
		from: from.into(),
		to: to.into(),
	};

	DiagramData::chain(
		vec![
			stage("GitHub", "Source Code", "GH", "#ffffff"),
			stage("Jenkins", "CI Build & Test", "CI", "#3b82f6"),
			stage("DockerHub", "Image Registry", "DH", "#06b6d4"),
			stage("Manifests", "Tag Update in Git", "K8", "#8b5cf6"),
			stage("ArgoCD", "GitOps Sync", "AR", "#f97316"),
			stage("Kubernetes", "Production", "KS", "#60a5fa"),
		],
		vec![
			stops("#ffffff", "#3b82f6"),
			stops("#3b82f6", "#06b6d4"),
			stops("#06b6d4", "#8b5cf6"),
			stops("#8b5cf6", "#f97316"),
			stops("#f97316", "#60a5fa"),
		],
	)
}

fn manifests() -> Vec<ConfigEntry> {
	vec![
		ConfigEntry {
			name: "Namespace",
			filename: "01-namespace.yaml",
			description: "Creates the 'fullstack' namespace to isolate resources.",
			code: "apiVersion: v1
kind: Namespace
metadata:
  name: fullstack",
		},
		ConfigEntry {
			name: "ConfigMap",
			filename: "02-configmap.yaml",
			description: "Stores non-sensitive configuration like API URLs.",
			code: "apiVersion: v1
kind: ConfigMap
metadata:
  name: fullstack-config
  namespace: fullstack
data:
  BACKEND_URL: \"http://backend-service:5000\"
  FLASK_ENV: \"production\"",
		},
		ConfigEntry {
			name: "Frontend Service",
			filename: "08-frontend-service.yaml",
			description: "Exposes the frontend internally on port 3005.",
			code: "apiVersion: v1
kind: Service
metadata:
  name: frontend-service
  namespace: fullstack
spec:
  selector:
    app: frontend
  ports:
    - protocol: TCP
      port: 3005
      targetPort: 3000
  type: ClusterIP",
		},
		ConfigEntry {
			name: "ArgoCD Application",
			filename: "argocd-application.yaml",
			description: "Defines the GitOps sync policy for the fullstack application.",
			code: "apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: fullstack-app
  namespace: argocd
spec:
  source:
    repoURL: https://github.com/himanm/devops-project-3.git
    targetRevision: HEAD
    path: k8s
  destination:
    server: https://kubernetes.default.svc
    namespace: fullstack
  syncPolicy:
    automated:
      prune: true
      selfHeal: true",
		},
	]
}

fn pipelines() -> Vec<ConfigEntry> {
	vec![
		ConfigEntry {
			name: "Build Pipeline",
			filename: "Jenkinsfile",
			description: "Builds the Docker images, pushes them to DockerHub and triggers the deploy job.",
			code: "pipeline {
    agent any
    environment {
        DOCKER_CRED = credentials('dockerhub-username')
        IMAGE_TAG = \"${BUILD_NUMBER}\"
    }
    stages {
        stage('Build Docker Images') {
            steps {
                sh 'docker build -t $DOCKER_CRED_USR/devops-project-3-frontend:$IMAGE_TAG ./frontend'
                sh 'docker build -t $DOCKER_CRED_USR/devops-project-3-backend:$IMAGE_TAG ./backend'
            }
        }
        stage('Push to DockerHub') {
            steps {
                sh 'echo $DOCKER_CRED_PSW | docker login -u $DOCKER_CRED_USR --password-stdin'
                sh 'docker push $DOCKER_CRED_USR/devops-project-3-frontend:$IMAGE_TAG'
                sh 'docker push $DOCKER_CRED_USR/devops-project-3-backend:$IMAGE_TAG'
            }
        }
    }
}",
		},
		ConfigEntry {
			name: "GitOps Deployment",
			filename: "Jenkinsfile.deploy",
			description: "Rewrites the image tags in the k8s manifests and pushes them, which ArgoCD picks up.",
			code: "pipeline {
    agent any
    parameters {
        string(name: 'IMAGE_TAG', description: 'Docker Image Tag to deploy')
    }
    stages {
        stage('Update Manifests') {
            steps {
                sh \"sed -i 's|image: .*/devops-project-3-frontend:.*|image: $DOCKER_CRED_USR/devops-project-3-frontend:${params.IMAGE_TAG}|' k8s/07-frontend-deploy.yaml\"
            }
        }
        stage('Push Changes') {
            steps {
                sh 'git commit -am \"Update image tags\" && git push origin main'
            }
        }
    }
}",
		},
	]
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="docs">
				<section id="overview" class="hero">
					<div class="hero-badge">"DevOps Project 3"</div>
					<h1>"Modern " <span class="hero-accent">"GitOps"</span> " Workflow"</h1>
					<p class="subtitle">
						"A complete guide to deploying full-stack applications on Kubernetes using Jenkins CI and ArgoCD GitOps."
					</p>
				</section>

				<section id="workflow">
					<h2>"The Workflow"</h2>
					<PipelineDiagram data=pipeline_stages() />
				</section>

				<section id="manifests">
					<h2>"Kubernetes Manifests"</h2>
					<ConfigTabs entries=manifests() />
				</section>

				<section id="jenkins">
					<h2>"Jenkins Pipelines"</h2>
					<ConfigTabs entries=pipelines() />
				</section>
			</main>
		</ErrorBoundary>
	}
}
