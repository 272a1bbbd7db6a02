//! The fixed stage and task catalogue.
//!
//! This is the data everything else walks: an ordered list of stage
//! definitions, each carrying its nominal duration, an applicability
//! predicate, an ordered task list, and reference resources. Catalogue
//! order is the canonical stage sequence.
//!
//! The predicates are business data. Several entries repeat the same
//! condition (for example `foundation-state-intent` carries its own copy
//! of the nomination-stream check that also gates the `state-nomination`
//! stage); the repeats are intentional and stay separate so each entry can
//! be edited on its own.
//!
//! Task ids are the durable contract surface: completion state is keyed by
//! them, so renaming an id orphans whatever the user had already ticked
//! off. Treat ids as frozen once shipped.

use crate::models::{Resource, StageBlueprint, TaskBlueprint, TaskLink, VisaStream};

/// Build the full catalogue.
///
/// Returns a fresh copy each call; the data itself never varies at
/// runtime.
pub fn stages() -> Vec<StageBlueprint> {
    vec![
        StageBlueprint {
            id: "foundations",
            title: "Foundations",
            summary: "Get oriented: confirm the visa stream, understand the \
                      points test, and set up the paperwork habits that every \
                      later stage leans on.",
            duration_weeks: 2,
            milestone: "You know which visa you are applying for and what it will cost",
            applies: |_profile| true,
            tasks: vec![
                TaskBlueprint {
                    id: "foundation-passport-check",
                    title: "Check passport validity",
                    detail: Some(
                        "Renew first if it expires within two years; every later \
                         application is keyed to the passport number.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "foundation-visa-research",
                    title: "Confirm your visa stream",
                    detail: Some(
                        "Compare the subclasses against your age, occupation and \
                         circumstances before committing to one.",
                    ),
                    link: Some(TaskLink {
                        label: "Visa finder",
                        url: "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-finder",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "foundation-points-estimate",
                    title: "Estimate your points score",
                    detail: Some(
                        "Work from documents you can actually produce, not best-case \
                         assumptions.",
                    ),
                    link: Some(TaskLink {
                        label: "Points calculator",
                        url: "https://immi.homeaffairs.gov.au/help-support/tools/points-calculator",
                    }),
                    applies: Some(|profile| {
                        matches!(
                            profile.visa_stream,
                            VisaStream::Independent
                                | VisaStream::StateNominated
                                | VisaStream::Regional
                        )
                    }),
                },
                TaskBlueprint {
                    id: "foundation-state-intent",
                    title: "Shortlist nomination states",
                    detail: Some(
                        "Each state publishes its own occupation list, minimum points \
                         and commitment conditions. Shortlist two or three.",
                    ),
                    link: None,
                    applies: Some(|profile| {
                        matches!(
                            profile.visa_stream,
                            VisaStream::StateNominated | VisaStream::Regional
                        )
                    }),
                },
                TaskBlueprint {
                    id: "foundation-occupation-check",
                    title: "Find your occupation on the skilled lists",
                    detail: Some(
                        "The list your occupation sits on constrains which subclasses \
                         are open to you.",
                    ),
                    link: Some(TaskLink {
                        label: "Skilled occupation list",
                        url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/skill-occupation-list",
                    }),
                    applies: Some(|profile| {
                        matches!(
                            profile.visa_stream,
                            VisaStream::Independent
                                | VisaStream::StateNominated
                                | VisaStream::Regional
                        )
                    }),
                },
                TaskBlueprint {
                    id: "foundation-budget",
                    title: "Build a budget for fees and evidence",
                    detail: Some(
                        "Application charges, skills assessments, English tests, \
                         translations and health checks add up quickly.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "foundation-documents-folder",
                    title: "Start a document folder",
                    detail: Some(
                        "Scan identity documents, qualifications and employment \
                         records now; you will attach them repeatedly.",
                    ),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "Visa finder",
                    description: "Explore Australian visa options by purpose",
                    url: "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-finder",
                    category: "official",
                },
                Resource {
                    title: "Points calculator",
                    description: "Estimate your skilled migration points score",
                    url: "https://immi.homeaffairs.gov.au/help-support/tools/points-calculator",
                    category: "official",
                },
            ],
        },
        StageBlueprint {
            id: "english-prep",
            title: "English test preparation",
            summary: "Choose a test, book it before the good slots disappear, and \
                      put in enough timed practice that test day holds no surprises.",
            duration_weeks: 4,
            milestone: "Test sat, results filed toward your points claim",
            applies: |profile| profile.needs_english_exam,
            tasks: vec![
                TaskBlueprint {
                    id: "english-choose-test",
                    title: "Choose your English test",
                    detail: Some(
                        "IELTS, PTE, TOEFL and Cambridge are all accepted; pick \
                         whichever format suits how you work.",
                    ),
                    link: None,
                    applies: Some(|profile| {
                        profile.english_test == crate::models::EnglishTest::None
                    }),
                },
                TaskBlueprint {
                    id: "english-book-test",
                    title: "Book a test date",
                    detail: Some("Centres in the big cities fill up weeks ahead."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "english-study-plan",
                    title: "Set a study routine",
                    detail: Some("Two practice sessions a week beats a cram the night before."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "english-practice-tests",
                    title: "Sit at least two full practice tests",
                    detail: Some("Timed, in one sitting, scored honestly."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "english-sit-test",
                    title: "Sit the test",
                    detail: None,
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "english-results",
                    title: "File your results",
                    detail: Some(
                        "Keep the test reference number handy; the score feeds \
                         directly into your points claim.",
                    ),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "IELTS",
                    description: "Test format, dates and preparation material",
                    url: "https://ielts.org",
                    category: "english",
                },
                Resource {
                    title: "PTE Academic",
                    description: "Computer-based English test accepted for Australian visas",
                    url: "https://www.pearsonpte.com",
                    category: "english",
                },
                Resource {
                    title: "English requirements",
                    description: "How test scores map to English levels for points",
                    url: "https://immi.homeaffairs.gov.au/help-support/meeting-our-requirements/english-language",
                    category: "official",
                },
            ],
        },
        StageBlueprint {
            id: "skills-assessment",
            title: "Skills assessment",
            summary: "Have your qualifications and employment history formally \
                      assessed by the authority responsible for your occupation. \
                      The slowest stage; start gathering evidence immediately.",
            duration_weeks: 8,
            milestone: "Positive assessment letter in hand",
            applies: |profile| {
                matches!(
                    profile.visa_stream,
                    VisaStream::Independent | VisaStream::StateNominated | VisaStream::Regional
                )
            },
            tasks: vec![
                TaskBlueprint {
                    id: "skills-pick-authority",
                    title: "Identify your assessing authority",
                    detail: Some(
                        "Each occupation maps to exactly one authority with its own \
                         rules, fees and timelines.",
                    ),
                    link: Some(TaskLink {
                        label: "Skilled occupation list",
                        url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/skill-occupation-list",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "skills-gather-evidence",
                    title: "Gather qualification and employment evidence",
                    detail: Some(
                        "Transcripts, award certificates, payslips and contracts, \
                         organised per role.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "skills-employment-references",
                    title: "Request detailed employment references",
                    detail: Some(
                        "On letterhead, signed and dated, with duties listed per \
                         role. Generic service letters get rejected.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "skills-translations",
                    title: "Translate non-English documents",
                    detail: Some("Use a certified translator and keep the originals paired."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "skills-partner-assessment",
                    title: "Assess your partner's skills too",
                    detail: Some(
                        "Partner points need their own assessment and English \
                         evidence; the lead times are just as long.",
                    ),
                    link: None,
                    applies: Some(|profile| profile.has_partner),
                },
                TaskBlueprint {
                    id: "skills-lodge-application",
                    title: "Lodge the assessment application",
                    detail: None,
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "skills-track-outcome",
                    title: "Track the outcome and file the letter",
                    detail: Some(
                        "Processing runs from weeks to months depending on the \
                         authority; the letter has an expiry date.",
                    ),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "ACS",
                    description: "Assessing authority for ICT occupations",
                    url: "https://www.acs.org.au",
                    category: "assessment",
                },
                Resource {
                    title: "VETASSESS",
                    description: "Assessing authority for many professional occupations",
                    url: "https://www.vetassess.com.au",
                    category: "assessment",
                },
                Resource {
                    title: "Engineers Australia",
                    description: "Assessing authority for engineering occupations",
                    url: "https://www.engineersaustralia.org.au",
                    category: "assessment",
                },
            ],
        },
        StageBlueprint {
            id: "expression-of-interest",
            title: "Expression of interest",
            summary: "Lodge your claim in SkillSelect and wait for an invitation \
                      round. Your points claim must now be backed by outcomes, not \
                      estimates.",
            duration_weeks: 3,
            milestone: "EOI lodged and visible to invitation rounds",
            applies: |profile| {
                matches!(
                    profile.visa_stream,
                    VisaStream::Independent | VisaStream::StateNominated | VisaStream::Regional
                )
            },
            tasks: vec![
                TaskBlueprint {
                    id: "eoi-skillselect-account",
                    title: "Create a SkillSelect account",
                    detail: None,
                    link: Some(TaskLink {
                        label: "SkillSelect",
                        url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/skillselect",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "eoi-final-points",
                    title: "Recheck your points claim",
                    detail: Some(
                        "Every point claimed in the EOI must be provable at \
                         lodgement; overclaiming leads to refusal.",
                    ),
                    link: Some(TaskLink {
                        label: "Points calculator",
                        url: "https://immi.homeaffairs.gov.au/help-support/tools/points-calculator",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "eoi-nomination-preferences",
                    title: "Pick nomination preferences",
                    detail: Some(
                        "Decide which states to name in the EOI; naming all of them \
                         can read as no commitment to any.",
                    ),
                    link: None,
                    applies: Some(|profile| {
                        matches!(
                            profile.visa_stream,
                            VisaStream::StateNominated | VisaStream::Regional
                        )
                    }),
                },
                TaskBlueprint {
                    id: "eoi-submit",
                    title: "Submit the EOI",
                    detail: None,
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "eoi-monitor-rounds",
                    title: "Watch invitation rounds",
                    detail: Some(
                        "Rounds run roughly monthly; track the cutoff scores for \
                         your occupation group.",
                    ),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "SkillSelect",
                    description: "Lodge and track expressions of interest",
                    url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/skillselect",
                    category: "official",
                },
                Resource {
                    title: "Points calculator",
                    description: "Recheck your claim against assessment outcomes",
                    url: "https://immi.homeaffairs.gov.au/help-support/tools/points-calculator",
                    category: "official",
                },
            ],
        },
        StageBlueprint {
            id: "state-nomination",
            title: "State nomination",
            summary: "Secure a nomination from a state or territory program. \
                      Programs open and close through the year and each runs its \
                      own process on top of SkillSelect.",
            duration_weeks: 5,
            milestone: "Nomination approved by a state or territory",
            applies: |profile| {
                matches!(
                    profile.visa_stream,
                    VisaStream::StateNominated | VisaStream::Regional
                )
            },
            tasks: vec![
                TaskBlueprint {
                    id: "nomination-compare-programs",
                    title: "Compare state nomination programs",
                    detail: Some(
                        "Occupation lists, minimum points and residence commitments \
                         differ by state and change mid-year.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "nomination-regional-research",
                    title: "Research designated regional areas",
                    detail: Some(
                        "The regional stream requires living and working in a \
                         designated area; check the postcode list for your targets.",
                    ),
                    link: Some(TaskLink {
                        label: "Regional migration",
                        url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/regional-migration",
                    }),
                    applies: Some(|profile| profile.visa_stream == VisaStream::Regional),
                },
                TaskBlueprint {
                    id: "nomination-state-application",
                    title: "Apply to your chosen state",
                    detail: Some(
                        "Some states only invite from SkillSelect; others take \
                         direct applications with their own fee.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "nomination-commitment-statement",
                    title: "Write the commitment statement",
                    detail: Some(
                        "Why that state: job prospects, ties, research you have \
                         actually done. Template statements are obvious.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "nomination-track",
                    title: "Track the nomination outcome",
                    detail: None,
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "SkillSelect",
                    description: "Lodge and track expressions of interest",
                    url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/skillselect",
                    category: "official",
                },
                Resource {
                    title: "Regional migration",
                    description: "Designated regional areas and incentives",
                    url: "https://immi.homeaffairs.gov.au/visas/working-in-australia/regional-migration",
                    category: "official",
                },
            ],
        },
        StageBlueprint {
            id: "partner-evidence",
            title: "Partner evidence",
            summary: "Build the relationship evidence file: the four pillars are \
                      finances, household, social recognition and commitment, and \
                      the strongest files cover all of them across time.",
            duration_weeks: 6,
            milestone: "Relationship evidence compiled and witnessed",
            applies: |profile| profile.visa_stream == VisaStream::Partner,
            tasks: vec![
                TaskBlueprint {
                    id: "partner-relationship-timeline",
                    title: "Write your relationship timeline",
                    detail: Some(
                        "Dates, addresses, travel together, how you met. Both \
                         partners' statements must agree on the details.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "partner-joint-finances",
                    title: "Collect joint financial evidence",
                    detail: Some(
                        "Shared accounts, leases, bills and beneficiary \
                         nominations, spread across the relationship rather than \
                         bunched at the end.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "partner-social-evidence",
                    title: "Collect social evidence",
                    detail: Some(
                        "Photos over time, joint invitations, travel bookings, \
                         statements from friends and family.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "partner-statutory-declarations",
                    title: "Arrange statutory declarations",
                    detail: Some(
                        "Two witnesses who are Australian citizens or permanent \
                         residents, on the prescribed form.",
                    ),
                    link: Some(TaskLink {
                        label: "Form 888",
                        url: "https://immi.homeaffairs.gov.au/form-listing/forms/888.pdf",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "partner-sponsor-documents",
                    title: "Prepare the sponsor's documents",
                    detail: Some("Identity, citizenship or residency evidence, and the sponsor form."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "partner-children-arrangements",
                    title: "Document arrangements for children",
                    detail: Some(
                        "Birth certificates, custody arrangements and consent from \
                         any non-migrating parent.",
                    ),
                    link: None,
                    applies: Some(|profile| profile.has_children),
                },
            ],
            resources: vec![
                Resource {
                    title: "Partner visa options",
                    description: "Onshore and offshore partner visa pathways",
                    url: "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-listing/partner-onshore",
                    category: "official",
                },
                Resource {
                    title: "Form 888",
                    description: "Statutory declaration by a supporting witness",
                    url: "https://immi.homeaffairs.gov.au/form-listing/forms/888.pdf",
                    category: "forms",
                },
            ],
        },
        StageBlueprint {
            id: "graduate-visa",
            title: "Graduate visa",
            summary: "Convert your Australian study into a temporary graduate \
                      visa. Short stage, but the completion letter and insurance \
                      must line up with the lodgement window.",
            duration_weeks: 3,
            milestone: "Graduate visa application ready to lodge",
            applies: |profile| profile.visa_stream == VisaStream::Graduate,
            tasks: vec![
                TaskBlueprint {
                    id: "graduate-completion-letter",
                    title: "Request your course completion letter",
                    detail: Some(
                        "Issued by the provider once final results are released; \
                         the lodgement window is counted from it.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "graduate-study-requirement",
                    title: "Confirm the Australian study requirement",
                    detail: Some(
                        "Two academic years of CRICOS-registered study; check your \
                         course codes before relying on it.",
                    ),
                    link: Some(TaskLink {
                        label: "CRICOS",
                        url: "https://cricos.education.gov.au",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "graduate-stream-choice",
                    title: "Pick the right graduate stream",
                    detail: Some(
                        "Post-study work and graduate work streams differ in \
                         length and eligibility by qualification level.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "graduate-insurance",
                    title: "Arrange adequate health insurance",
                    detail: Some("Cover must span from lodgement, not from the grant."),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "Temporary Graduate visa",
                    description: "Subclass 485 streams and eligibility",
                    url: "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-listing/temporary-graduate-485",
                    category: "official",
                },
                Resource {
                    title: "CRICOS",
                    description: "Register of courses that count toward the study requirement",
                    url: "https://cricos.education.gov.au",
                    category: "education",
                },
            ],
        },
        StageBlueprint {
            id: "visa-lodgement",
            title: "Visa lodgement",
            summary: "Assemble the application in ImmiAccount, order the checks \
                      that take longest first, and submit with every claim backed \
                      by an attachment.",
            duration_weeks: 4,
            milestone: "Application lodged and acknowledged",
            applies: |_profile| true,
            tasks: vec![
                TaskBlueprint {
                    id: "lodge-immiaccount",
                    title: "Create an ImmiAccount",
                    detail: None,
                    link: Some(TaskLink {
                        label: "ImmiAccount",
                        url: "https://online.immi.gov.au",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "lodge-police-checks",
                    title: "Order police certificates",
                    detail: Some(
                        "AFP check plus one from every country you lived in for \
                         twelve months or more in the last ten years.",
                    ),
                    link: Some(TaskLink {
                        label: "National police checks",
                        url: "https://www.afp.gov.au/what-we-do/services/criminal-records/national-police-checks",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "lodge-health-exams",
                    title: "Book health examinations",
                    detail: Some(
                        "Panel clinics only; book once you have the HAP ID from \
                         your application.",
                    ),
                    link: Some(TaskLink {
                        label: "Bupa Medical Visa Services",
                        url: "https://www.bmvs.com.au",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "lodge-partner-documents",
                    title: "Compile your partner's documents",
                    detail: Some(
                        "Identity, relationship evidence and English or second \
                         instalment arrangements for the secondary applicant.",
                    ),
                    link: None,
                    applies: Some(|profile| profile.has_partner),
                },
                TaskBlueprint {
                    id: "lodge-children-documents",
                    title: "Compile your children's documents",
                    detail: Some("Birth certificates, school records and custody consent where it applies."),
                    link: None,
                    applies: Some(|profile| profile.has_children),
                },
                TaskBlueprint {
                    id: "lodge-form-fill",
                    title: "Complete the application form",
                    detail: Some(
                        "Answers must match the evidence you attach; \
                         inconsistencies trigger requests for more information.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "lodge-pay-submit",
                    title: "Pay and submit",
                    detail: Some("Charges are per applicant and non-refundable."),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "ImmiAccount",
                    description: "Lodge and manage visa applications online",
                    url: "https://online.immi.gov.au",
                    category: "official",
                },
                Resource {
                    title: "National police checks",
                    description: "Australian Federal Police certificate applications",
                    url: "https://www.afp.gov.au/what-we-do/services/criminal-records/national-police-checks",
                    category: "official",
                },
                Resource {
                    title: "Health examinations",
                    description: "Panel clinic bookings for visa medicals",
                    url: "https://www.bmvs.com.au",
                    category: "health",
                },
            ],
        },
        StageBlueprint {
            id: "settlement",
            title: "Settlement",
            summary: "Land on your feet: the first weeks go to accounts, \
                      enrolments and registrations that everything else in \
                      Australian life hangs off.",
            duration_weeks: 6,
            milestone: "Settled in with banking, tax, health and transport sorted",
            applies: |_profile| true,
            tasks: vec![
                TaskBlueprint {
                    id: "settle-arrival-plan",
                    title: "Plan your first weeks",
                    detail: Some(
                        "Temporary accommodation near work or transport, a local \
                         SIM, and a short list of what to do in week one.",
                    ),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "settle-bank-account",
                    title: "Open an Australian bank account",
                    detail: Some("Most banks let you open online before you arrive and verify in branch."),
                    link: None,
                    applies: None,
                },
                TaskBlueprint {
                    id: "settle-tfn",
                    title: "Apply for a tax file number",
                    detail: Some("Free, online, and needed before your first payday."),
                    link: Some(TaskLink {
                        label: "Apply for a TFN",
                        url: "https://www.ato.gov.au/individuals-and-families/tax-file-number",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "settle-medicare",
                    title: "Enrol in Medicare",
                    detail: Some("Bring your passport and visa grant letter to a service centre."),
                    link: Some(TaskLink {
                        label: "Medicare enrolment",
                        url: "https://www.servicesaustralia.gov.au/medicare",
                    }),
                    applies: None,
                },
                TaskBlueprint {
                    id: "settle-schools",
                    title: "Shortlist schools and childcare",
                    detail: Some(
                        "Catchment areas bind you to an address; check them before \
                         signing a lease.",
                    ),
                    link: None,
                    applies: Some(|profile| profile.has_children),
                },
                TaskBlueprint {
                    id: "settle-state-services",
                    title: "Register with your state's arrival services",
                    detail: Some(
                        "Nominated migrants often have reporting obligations; \
                         others still get free settlement support.",
                    ),
                    link: None,
                    applies: Some(|profile| {
                        profile.relocating_state != crate::models::State::National
                    }),
                },
                TaskBlueprint {
                    id: "settle-drivers-licence",
                    title: "Transfer your driver's licence",
                    detail: Some(
                        "Rules differ by state; most allow about three months on an \
                         overseas licence.",
                    ),
                    link: None,
                    applies: None,
                },
            ],
            resources: vec![
                Resource {
                    title: "Tax file number",
                    description: "Apply for a TFN with the Australian Taxation Office",
                    url: "https://www.ato.gov.au/individuals-and-families/tax-file-number",
                    category: "government",
                },
                Resource {
                    title: "Medicare enrolment",
                    description: "Enrol for public health cover after arrival",
                    url: "https://www.servicesaustralia.gov.au/medicare",
                    category: "government",
                },
                Resource {
                    title: "Settling in Australia",
                    description: "Values, laws and living information for new arrivals",
                    url: "https://immi.homeaffairs.gov.au/settling-in-australia",
                    category: "official",
                },
            ],
        },
    ]
}
