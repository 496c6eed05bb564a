//! Curated fallback tables, keyed by category.
//!
//! Live listings pages change markup without notice, so several adapters
//! carry a hand-maintained table of known-good free courses per category.
//! Curated entries are appended by [`CourseSource::pull`] only for URLs the
//! live query did not already produce.
//!
//! [`CourseSource::pull`]: super::CourseSource::pull

use crate::models::RawCandidate;

/// A hand-maintained catalog entry template.
///
/// Templates are static data; they become [`RawCandidate`]s when an adapter
/// materializes them for a category.
#[derive(Debug, Clone, Copy)]
pub struct CandidateTemplate {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub platform: &'static str,
    pub level: Option<&'static str>,
}

impl CandidateTemplate {
    /// Materialize the template into a candidate for one category.
    pub fn to_candidate(&self, category: &str) -> RawCandidate {
        RawCandidate {
            title: self.title.to_string(),
            url: self.url.to_string(),
            raw_description: self.description.to_string(),
            platform: self.platform.to_string(),
            category: category.to_string(),
            level: self.level.map(|l| l.to_string()),
        }
    }
}

/// freeCodeCamp certifications per category.
pub fn freecodecamp(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Python Programming" => &[CandidateTemplate {
            title: "Scientific Computing with Python",
            url: "https://www.freecodecamp.org/learn/scientific-computing-with-python/",
            description: "Free certification covering Python fundamentals, data structures, \
                          and algorithm practice through hands-on projects.",
            platform: "freeCodeCamp",
            level: Some("Beginner"),
        }],
        "Data Science AI" => &[
            CandidateTemplate {
                title: "Data Analysis with Python",
                url: "https://www.freecodecamp.org/learn/data-analysis-with-python/",
                description: "Free certification teaching data analysis with NumPy, Pandas, \
                              and Matplotlib.",
                platform: "freeCodeCamp",
                level: Some("Intermediate"),
            },
            CandidateTemplate {
                title: "Machine Learning with Python",
                url: "https://www.freecodecamp.org/learn/machine-learning-with-python/",
                description: "Free certification introducing TensorFlow, neural networks, \
                              and core machine-learning techniques.",
                platform: "freeCodeCamp",
                level: Some("Intermediate"),
            },
        ],
        "Web Development" => &[
            CandidateTemplate {
                title: "Responsive Web Design",
                url: "https://www.freecodecamp.org/learn/2022/responsive-web-design/",
                description: "Free certification teaching HTML and CSS by building a series \
                              of responsive web pages.",
                platform: "freeCodeCamp",
                level: Some("Beginner"),
            },
            CandidateTemplate {
                title: "JavaScript Algorithms and Data Structures",
                url: "https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures-v8/",
                description: "Free certification covering JavaScript fundamentals, ES6, \
                              algorithms, and data structures.",
                platform: "freeCodeCamp",
                level: Some("Beginner"),
            },
        ],
        "IT Cybersecurity" => &[CandidateTemplate {
            title: "Information Security",
            url: "https://www.freecodecamp.org/learn/information-security/",
            description: "Free certification on HelmetJS, penetration testing with Python, \
                          and information security practices.",
            platform: "freeCodeCamp",
            level: Some("Intermediate"),
        }],
        "Project Management Agile" => &[CandidateTemplate {
            title: "College Algebra with Python",
            url: "https://www.freecodecamp.org/learn/college-algebra-with-python/",
            description: "Free certification building quantitative skills with Python \
                          notebooks, useful groundwork for planning and estimation.",
            platform: "freeCodeCamp",
            level: Some("Beginner"),
        }],
        _ => &[],
    }
}

/// Grow with Google certificate listings per category.
pub fn google(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Python Programming" => &[CandidateTemplate {
            title: "Google IT Automation with Python",
            url: "https://grow.google/certificates/it-automation/",
            description: "Professional certificate teaching Python scripting, Git, and IT \
                          task automation. Free to audit.",
            platform: "Google Career Certificates",
            level: Some("Beginner"),
        }],
        "Data Science AI" => &[
            CandidateTemplate {
                title: "Google Data Analytics Certificate",
                url: "https://grow.google/certificates/data-analytics/",
                description: "Professional certificate covering spreadsheets, SQL, R, and \
                              Tableau for entry-level data analysis.",
                platform: "Google Career Certificates",
                level: Some("Beginner"),
            },
            CandidateTemplate {
                title: "Google AI Essentials",
                url: "https://grow.google/ai-essentials/",
                description: "Self-paced course on using AI tools productively and \
                              responsibly at work.",
                platform: "Google Career Certificates",
                level: None,
            },
        ],
        "Web Development" => &[CandidateTemplate {
            title: "Google UX Design Certificate",
            url: "https://grow.google/certificates/ux-design/",
            description: "Professional certificate on UX research, wireframing, and \
                          prototyping for the web.",
            platform: "Google Career Certificates",
            level: Some("Beginner"),
        }],
        "IT Cybersecurity" => &[
            CandidateTemplate {
                title: "Google Cybersecurity Certificate",
                url: "https://grow.google/certificates/cybersecurity/",
                description: "Professional certificate covering SIEM tools, Linux, SQL, and \
                              incident response for entry-level security roles.",
                platform: "Google Career Certificates",
                level: Some("Beginner"),
            },
            CandidateTemplate {
                title: "Google IT Support Certificate",
                url: "https://grow.google/certificates/it-support/",
                description: "Professional certificate on troubleshooting, networking, \
                              operating systems, and system administration.",
                platform: "Google Career Certificates",
                level: Some("Beginner"),
            },
        ],
        "Project Management Agile" => &[CandidateTemplate {
            title: "Google Project Management Certificate",
            url: "https://grow.google/certificates/project-management/",
            description: "Professional certificate covering traditional and Agile project \
                          management, including Scrum.",
            platform: "Google Career Certificates",
            level: Some("Beginner"),
        }],
        _ => &[],
    }
}

/// MIT OpenCourseWare course pages per category.
pub fn mit_ocw(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Python Programming" => &[CandidateTemplate {
            title: "Introduction to Computer Science and Programming in Python",
            url: "https://ocw.mit.edu/courses/6-0001-introduction-to-computer-science-and-programming-in-python-fall-2016/",
            description: "MIT's 6.0001: computation, Python programming, and simple \
                          algorithms, with full lecture videos and assignments.",
            platform: "MIT OpenCourseWare",
            level: Some("Beginner"),
        }],
        "Data Science AI" => &[CandidateTemplate {
            title: "Introduction to Machine Learning",
            url: "https://ocw.mit.edu/courses/6-036-introduction-to-machine-learning-fall-2020/",
            description: "MIT's 6.036: principles and algorithms of machine learning, from \
                          perceptrons to neural networks.",
            platform: "MIT OpenCourseWare",
            level: Some("Intermediate"),
        }],
        "Web Development" => &[CandidateTemplate {
            title: "Software Studio",
            url: "https://ocw.mit.edu/courses/6-170-software-studio-spring-2013/",
            description: "MIT's 6.170: design and construction of web applications, \
                          covering data modeling and JavaScript.",
            platform: "MIT OpenCourseWare",
            level: Some("Intermediate"),
        }],
        "IT Cybersecurity" => &[CandidateTemplate {
            title: "Computer Systems Security",
            url: "https://ocw.mit.edu/courses/6-858-computer-systems-security-fall-2014/",
            description: "MIT's 6.858: threat models, attacks, and defenses for building \
                          secure computer systems.",
            platform: "MIT OpenCourseWare",
            level: Some("Advanced"),
        }],
        "Project Management Agile" => &[CandidateTemplate {
            title: "Project Management",
            url: "https://ocw.mit.edu/courses/1-040-project-management-spring-2009/",
            description: "MIT's 1.040: project planning, scheduling, estimation, and risk \
                          management techniques.",
            platform: "MIT OpenCourseWare",
            level: Some("Intermediate"),
        }],
        _ => &[],
    }
}

/// IBM SkillsBuild learning paths per category.
pub fn ibm(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Data Science AI" => &[CandidateTemplate {
            title: "Artificial Intelligence Fundamentals",
            url: "https://skillsbuild.org/adult-learners/explore-learning/artificial-intelligence",
            description: "Free IBM credential introducing AI concepts, natural language \
                          processing, and AI ethics.",
            platform: "IBM SkillsBuild",
            level: Some("Beginner"),
        }],
        "Web Development" => &[CandidateTemplate {
            title: "Web Development Fundamentals",
            url: "https://skillsbuild.org/adult-learners/explore-learning/web-developer",
            description: "Free IBM learning path covering HTML, CSS, JavaScript, and the \
                          web developer role.",
            platform: "IBM SkillsBuild",
            level: Some("Beginner"),
        }],
        "IT Cybersecurity" => &[CandidateTemplate {
            title: "Cybersecurity Fundamentals",
            url: "https://skillsbuild.org/adult-learners/explore-learning/cybersecurity-analyst",
            description: "Free IBM credential on cyber threats, defenses, and the \
                          cybersecurity analyst role.",
            platform: "IBM SkillsBuild",
            level: Some("Beginner"),
        }],
        "Project Management Agile" => &[CandidateTemplate {
            title: "Project Management Fundamentals",
            url: "https://skillsbuild.org/adult-learners/explore-learning/project-manager",
            description: "Free IBM learning path introducing project lifecycles, Agile \
                          practice, and collaboration tools.",
            platform: "IBM SkillsBuild",
            level: Some("Beginner"),
        }],
        _ => &[],
    }
}

/// AWS Skill Builder digital courses per category.
pub fn aws(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Data Science AI" => &[CandidateTemplate {
            title: "AWS Machine Learning Essentials",
            url: "https://explore.skillbuilder.aws/learn/public/learning_plan/view/28/machine-learning-learning-plan",
            description: "Free digital learning plan introducing machine-learning concepts \
                          and AWS ML services.",
            platform: "AWS Skill Builder",
            level: Some("Beginner"),
        }],
        "IT Cybersecurity" => &[CandidateTemplate {
            title: "AWS Security Fundamentals",
            url: "https://explore.skillbuilder.aws/learn/course/external/view/elearning/48/aws-security-fundamentals",
            description: "Free digital course on AWS security concepts, including access \
                          control, data encryption, and monitoring.",
            platform: "AWS Skill Builder",
            level: Some("Beginner"),
        }],
        "Project Management Agile" => &[CandidateTemplate {
            title: "AWS Cloud Practitioner Essentials",
            url: "https://explore.skillbuilder.aws/learn/course/external/view/elearning/134/aws-cloud-practitioner-essentials",
            description: "Free digital course giving an overall understanding of the AWS \
                          Cloud, independent of specific technical roles.",
            platform: "AWS Skill Builder",
            level: Some("Beginner"),
        }],
        _ => &[],
    }
}

/// Stanford Online free courses per category.
pub fn stanford(category: &str) -> &'static [CandidateTemplate] {
    match category {
        "Python Programming" => &[CandidateTemplate {
            title: "Computer Science 101",
            url: "https://online.stanford.edu/courses/soe-ycscs101-computer-science-101",
            description: "Self-paced Stanford course teaching the essential ideas of \
                          computer science for a zero-experience audience.",
            platform: "Stanford Online",
            level: Some("Beginner"),
        }],
        "Data Science AI" => &[CandidateTemplate {
            title: "Statistical Learning",
            url: "https://online.stanford.edu/courses/sohs-ystatslearning-statistical-learning",
            description: "Free Stanford course on supervised learning, from linear \
                          regression through to deep learning, with R labs.",
            platform: "Stanford Online",
            level: Some("Intermediate"),
        }],
        _ => &[],
    }
}
