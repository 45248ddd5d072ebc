//! The fixed resume content record.
//!
//! Constructed fresh on every request, never persisted, never mutated after
//! construction. The only dynamic input is the clock reading used for the
//! elapsed-experience figure in the summary.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<String>,
}

/// One employment entry. `period` is display-only free text, never parsed.
#[derive(Debug, Clone, Serialize)]
pub struct WorkExperience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reference {
    pub name: String,
    pub relation: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeContent {
    pub name: String,
    pub title: String,
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<WorkExperience>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub references: Vec<Reference>,
}

/// Start of the professional experience window the summary counts from.
fn experience_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 1).expect("valid fixed start date")
}

/// Elapsed experience in years: whole months between `start` and `now`
/// (day-of-month ignored), divided by 12, rounded to one decimal.
pub fn experience_years(start: NaiveDate, now: NaiveDate) -> f64 {
    let months = (now.year() - start.year()) * 12 + (now.month() as i32 - start.month() as i32);
    (months as f64 / 12.0 * 10.0).round() / 10.0
}

fn summary_for(now: NaiveDate) -> String {
    format!(
        "Results-driven Frontend Developer with {:.1} years of experience in building \
         responsive and user-friendly web applications. Proficient in React, Next.js, and \
         modern JavaScript frameworks. Passionate about creating efficient, accessible, and \
         visually appealing interfaces. Strong collaborator with experience in Agile \
         environments and a track record of delivering high-quality code.",
        experience_years(experience_start(), now)
    )
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ResumeContent {
    /// The single resume this service serves. Built per request so the
    /// summary reflects the current clock reading.
    pub fn standard(now: DateTime<Utc>) -> Self {
        ResumeContent {
            name: "JICK T. LAMPAGO".to_string(),
            title: "Frontend Developer".to_string(),
            contact: Contact {
                email: "lampagojick5@gmail.com".to_string(),
                phone: "09490390624".to_string(),
                location: "Sitio Crossan, Talisay, Cebu, Philippines".to_string(),
                links: strs(&[
                    "https://www.linkedin.com/in/jick-lampago",
                    "https://www.jicklampago.xyz",
                ]),
            },
            summary: summary_for(now.date_naive()),
            experience: vec![
                WorkExperience {
                    role: "Mid Frontend Developer".to_string(),
                    company: "Commerce Acceptance Solution. Inc".to_string(),
                    period: "2022 - Present".to_string(),
                    bullets: strs(&[
                        "Develop and maintain secure, high-traffic web applications focused on \
                         payment processing, e-commerce workflows, and admin portals.",
                        "Contribute to the frontend of payment gateway–related systems, ensuring \
                         secure handling of sensitive data and compliance with best practices.",
                        "Led the modernization of a legacy JavaScript codebase to React + \
                         TypeScript, significantly improving code reliability, maintainability, \
                         and reducing production issues by ~40%.",
                        "Build role-based admin dashboards for transaction monitoring, order \
                         management, and system configuration.",
                        "Implement scalable state management and data fetching using Redux and \
                         React Query, ensuring consistent and predictable UI behavior.",
                        "Collaborate closely with backend, QA, and product teams to deliver \
                         secure, performance-optimized user experiences.",
                        "Apply accessibility standards and responsive design principles for \
                         cross-device and cross-browser compatibility.",
                    ]),
                    tags: strs(&["React", "TypeScript", "Redux", "React Query"]),
                },
                WorkExperience {
                    role: "Frontend Developer".to_string(),
                    company: "Elearnified".to_string(),
                    period: "Jun 2022 - Aug 2022".to_string(),
                    bullets: strs(&[
                        "Revamped the Moodle-based LMS for Philippine Red Cross, improving user \
                         experience and accessibility.",
                        "Implemented responsive designs using SCSS and enhanced interactivity \
                         with JavaScript and jQuery.",
                        "Collaborated with the design team to implement UI/UX improvements.",
                    ]),
                    tags: strs(&["SCSS", "JavaScript", "jQuery"]),
                },
                WorkExperience {
                    role: "React.js Developer".to_string(),
                    company: "Codally Tech".to_string(),
                    period: "Nov 2020 - Dec 2020".to_string(),
                    bullets: strs(&[
                        "Part of the UI development team working on A+ Learning platform, an \
                         online school platform during pandemic",
                        "Developed the entire UI using Next.js and Material UI following Agile \
                         methodology",
                        "Collaborated with team members to implement responsive and \
                         user-friendly designs",
                        "Contributed to the development of educational features for the online \
                         learning platform",
                    ]),
                    tags: strs(&["Next.js", "Material UI"]),
                },
                WorkExperience {
                    role: "Full Stack Developer".to_string(),
                    company: "Abakada Studios".to_string(),
                    period: "Mar 2021 - May 2022".to_string(),
                    bullets: strs(&[
                        "Developed and maintained frontend applications using Vue.js and \
                         vanilla JavaScript.",
                        "Integrated Paymongo payment gateway into multiple e-commerce platforms.",
                        "Collaborated with backend developers to design and implement RESTful \
                         APIs.",
                    ]),
                    tags: strs(&["Vue.js", "JavaScript", "REST APIs"]),
                },
            ],
            skills: vec![
                SkillCategory {
                    label: "Frontend Development".to_string(),
                    skills: strs(&[
                        "React",
                        "Next.js",
                        "TypeScript",
                        "Tailwind CSS",
                        "Redux",
                        "React Query",
                        "Shadcn/ui",
                        "Material UI",
                    ]),
                },
                SkillCategory {
                    label: "Mobile Development".to_string(),
                    skills: strs(&[
                        "React Native",
                        "Expo",
                        "iOS",
                        "Android",
                        "Mobile UI/UX",
                        "Native Modules",
                    ]),
                },
                SkillCategory {
                    label: "Backend Development".to_string(),
                    skills: strs(&["Node.js", "Express", "REST APIs", "MongoDB"]),
                },
                SkillCategory {
                    label: "DevOps & AI Tools".to_string(),
                    skills: strs(&["Git", "CI/CD", "ChatGPT", "GitHub Copilot", "Windsurf"]),
                },
            ],
            education: vec![
                Education {
                    degree: "Apprenticeship in Full Stack Web Developer".to_string(),
                    school: "Tuitt Bootcamp Ph".to_string(),
                    period: "June 2020 - October 2020".to_string(),
                },
                Education {
                    degree: "Associated Course in Information Technology".to_string(),
                    school: "Cataingan Polytechnic Institute".to_string(),
                    period: "March 2011 - June 2013".to_string(),
                },
            ],
            references: vec![
                Reference {
                    name: "John Jason Gesulgon".to_string(),
                    relation: "Development Manager".to_string(),
                    email: "jjgesulgon@gmail.com".to_string(),
                    phone: "09258696132".to_string(),
                },
                Reference {
                    name: "Emmanuel Ganzon".to_string(),
                    relation: "Personal Friend".to_string(),
                    email: "emmanuel.ganzon93@gmail.com".to_string(),
                    phone: "09569144288".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_four_whole_years_is_exactly_4_0() {
        assert_eq!(experience_years(date(2020, 3, 1), date(2024, 3, 1)), 4.0);
    }

    #[test]
    fn test_half_year_rounds_to_one_decimal() {
        // 2020-03-01 → 2020-10-01 = 7 months = 0.5833… → 0.6
        assert_eq!(experience_years(date(2020, 3, 1), date(2020, 10, 1)), 0.6);
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        // Mid-month "now" counts the same whole months as the 1st.
        assert_eq!(
            experience_years(date(2020, 3, 1), date(2024, 3, 25)),
            experience_years(date(2020, 3, 1), date(2024, 3, 1)),
        );
    }

    #[test]
    fn test_years_are_monotonic_in_now() {
        let start = date(2020, 3, 1);
        let mut previous = f64::MIN;
        for year in 2020..2030 {
            for month in 1..=12 {
                if (year, month) < (2020, 3) {
                    continue;
                }
                let years = experience_years(start, date(year, month, 1));
                assert!(years >= previous, "{year}-{month} regressed: {years}");
                previous = years;
            }
        }
    }

    #[test]
    fn test_summary_embeds_computed_years() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let content = ResumeContent::standard(now);
        assert!(content.summary.starts_with(
            "Results-driven Frontend Developer with 4.0 years of experience"
        ));
    }

    #[test]
    fn test_standard_content_ordering_is_stable() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let content = ResumeContent::standard(now);
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.experience[0].role, "Mid Frontend Developer");
        assert_eq!(content.experience[3].company, "Abakada Studios");
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.skills[0].label, "Frontend Development");
        assert_eq!(content.skills[0].skills[0], "React");
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.references.len(), 2);
    }
}
