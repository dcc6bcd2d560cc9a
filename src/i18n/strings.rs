/// All localized strings of the site for one language.
///
/// Every bundle has the same shape: the same fields and the same number of
/// entries in `projects.items` and `about.value_items`. The shape is checked
/// by [`BundleValidator`](super::BundleValidator) and by the tests below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub projects: ProjectsStrings,
    pub about: AboutStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
}

/// Section anchors in the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStrings {
    pub home: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_project: &'static str,
    pub items: &'static [ProjectItem],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Comma-separated technology list, not translated
    pub tech: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mission: &'static str,
    pub mission_text: &'static str,
    pub vision: &'static str,
    pub vision_text: &'static str,
    pub values: &'static str,
    pub value_items: &'static [ValueItem],
    pub stats: StatsStrings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// Labels of the metrics strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsStrings {
    pub projects: &'static str,
    pub clients: &'static str,
    pub years: &'static str,
    pub team: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: ContactFormStrings,
    pub info: ContactInfoStrings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormStrings {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    /// Button label while a submission is in flight
    pub sending: &'static str,
    pub success: &'static str,
    /// Generic failure message; failure details are never shown
    pub error: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfoStrings {
    pub address: &'static str,
    pub address_text: &'static str,
    pub email: &'static str,
    pub email_text: &'static str,
    pub phone: &'static str,
    pub phone_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterStrings {
    pub rights: &'static str,
    pub tagline: &'static str,
}

impl LanguageStrings {
    /// Flatten the bundle into `(dotted key, value)` pairs.
    ///
    /// Keys use the site's semantic names, e.g. `nav.home`,
    /// `contact.form.submit` or `about.valueItems[2].title`.
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        let mut out = Vec::new();
        let mut push = |key: &str, value: &'static str| out.push((key.to_string(), value));

        push("nav.home", self.nav.home);
        push("nav.projects", self.nav.projects);
        push("nav.about", self.nav.about);
        push("nav.contact", self.nav.contact);

        push("hero.title", self.hero.title);
        push("hero.subtitle", self.hero.subtitle);
        push("hero.tagline", self.hero.tagline);
        push("hero.description", self.hero.description);
        push("hero.cta", self.hero.cta);
        push("hero.ctaSecondary", self.hero.cta_secondary);

        push("projects.title", self.projects.title);
        push("projects.subtitle", self.projects.subtitle);
        push("projects.viewProject", self.projects.view_project);
        for (i, item) in self.projects.items.iter().enumerate() {
            push(&format!("projects.items[{i}].title"), item.title);
            push(&format!("projects.items[{i}].description"), item.description);
            push(&format!("projects.items[{i}].tech"), item.tech);
        }

        push("about.title", self.about.title);
        push("about.subtitle", self.about.subtitle);
        push("about.mission", self.about.mission);
        push("about.missionText", self.about.mission_text);
        push("about.vision", self.about.vision);
        push("about.visionText", self.about.vision_text);
        push("about.values", self.about.values);
        for (i, item) in self.about.value_items.iter().enumerate() {
            push(&format!("about.valueItems[{i}].title"), item.title);
            push(&format!("about.valueItems[{i}].description"), item.description);
        }
        push("about.stats.projects", self.about.stats.projects);
        push("about.stats.clients", self.about.stats.clients);
        push("about.stats.years", self.about.stats.years);
        push("about.stats.team", self.about.stats.team);

        push("contact.title", self.contact.title);
        push("contact.subtitle", self.contact.subtitle);
        push("contact.form.name", self.contact.form.name);
        push("contact.form.email", self.contact.form.email);
        push("contact.form.phone", self.contact.form.phone);
        push("contact.form.subject", self.contact.form.subject);
        push("contact.form.message", self.contact.form.message);
        push("contact.form.submit", self.contact.form.submit);
        push("contact.form.sending", self.contact.form.sending);
        push("contact.form.success", self.contact.form.success);
        push("contact.form.error", self.contact.form.error);
        push("contact.info.address", self.contact.info.address);
        push("contact.info.addressText", self.contact.info.address_text);
        push("contact.info.email", self.contact.info.email);
        push("contact.info.emailText", self.contact.info.email_text);
        push("contact.info.phone", self.contact.info.phone);
        push("contact.info.phoneText", self.contact.info.phone_text);

        push("footer.rights", self.footer.rights);
        push("footer.tagline", self.footer.tagline);

        out
    }

    /// Look up a single string by its dotted key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }
}

/// Bundle for a registered language code. Unknown codes resolve to English.
pub(crate) fn for_code(code: &str) -> &'static LanguageStrings {
    match code {
        "fr" => &FRENCH_STRINGS,
        "ar" => &ARABIC_STRINGS,
        _ => &ENGLISH_STRINGS,
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    nav: NavStrings {
        home: "Home",
        projects: "Projects",
        about: "About Us",
        contact: "Contact",
    },
    hero: HeroStrings {
        title: "NOVAYTEK",
        subtitle: "IT Solutions",
        tagline: "Transforming Ideas into Digital Reality",
        description: "We deliver cutting-edge IT solutions tailored to your business needs. \
From web development to cloud infrastructure, we make technology work for you.",
        cta: "Get Started",
        cta_secondary: "Learn More",
    },
    projects: ProjectsStrings {
        title: "Our Projects",
        subtitle: "Excellence in Every Line of Code",
        view_project: "View Project",
        items: &[
            ProjectItem {
                title: "E-Commerce Platform",
                description: "A comprehensive online marketplace with advanced inventory management \
and seamless payment integration.",
                tech: "React, Node.js, PostgreSQL",
            },
            ProjectItem {
                title: "Healthcare Management System",
                description: "Digital transformation of patient records and appointment scheduling \
for modern healthcare facilities.",
                tech: "Vue.js, Express, MongoDB",
            },
            ProjectItem {
                title: "Financial Analytics Dashboard",
                description: "Real-time data visualization and reporting platform for financial institutions.",
                tech: "React, Python, MySQL",
            },
            ProjectItem {
                title: "IoT Smart City Solution",
                description: "Integrated platform for managing urban infrastructure and public services \
through IoT devices.",
                tech: "Angular, Java, PostgreSQL",
            },
            ProjectItem {
                title: "Educational Learning Portal",
                description: "Interactive e-learning platform with live classes, assessments, and progress tracking.",
                tech: "Next.js, GraphQL, MongoDB",
            },
            ProjectItem {
                title: "Cloud Migration Services",
                description: "Successfully migrated enterprise applications to cloud infrastructure \
with zero downtime.",
                tech: "AWS, Docker, Kubernetes",
            },
        ],
    },
    about: AboutStrings {
        title: "About NOVAYTEK",
        subtitle: "Your Trusted Technology Partner",
        mission: "Our Mission",
        mission_text: "To empower businesses through innovative technology solutions that drive growth, \
efficiency, and digital transformation.",
        vision: "Our Vision",
        vision_text: "To be the leading IT solutions provider, recognized for excellence, innovation, \
and unwavering commitment to client success.",
        values: "Our Values",
        value_items: &[
            ValueItem {
                title: "Innovation",
                description: "Constantly pushing boundaries with cutting-edge technologies",
            },
            ValueItem {
                title: "Quality",
                description: "Delivering excellence in every project we undertake",
            },
            ValueItem {
                title: "Integrity",
                description: "Building trust through transparency and ethical practices",
            },
            ValueItem {
                title: "Partnership",
                description: "Working alongside clients to achieve their goals",
            },
        ],
        stats: StatsStrings {
            projects: "Projects Completed",
            clients: "Happy Clients",
            years: "Years Experience",
            team: "Team Members",
        },
    },
    contact: ContactStrings {
        title: "Get In Touch",
        subtitle: "Let's Build Something Amazing Together",
        form: ContactFormStrings {
            name: "Full Name",
            email: "Email Address",
            phone: "Phone Number",
            subject: "Subject",
            message: "Your Message",
            submit: "Send Message",
            sending: "Sending...",
            success: "Message sent successfully! We will get back to you soon.",
            error: "Failed to send message. Please try again.",
        },
        info: ContactInfoStrings {
            address: "Address",
            address_text: "123 Tech Avenue, Innovation District",
            email: "Email",
            email_text: "contact@novaytek.com",
            phone: "Phone",
            phone_text: "+1 (555) 123-4567",
        },
    },
    footer: FooterStrings {
        rights: "All rights reserved.",
        tagline: "Building the future, one solution at a time.",
    },
};

// ==================== French Strings ====================

/// French language strings
pub static FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    nav: NavStrings {
        home: "Accueil",
        projects: "Projets",
        about: "À Propos",
        contact: "Contact",
    },
    hero: HeroStrings {
        title: "NOVAYTEK",
        subtitle: "Solutions Informatiques",
        tagline: "Transformer les Idées en Réalité Numérique",
        description: "Nous fournissons des solutions informatiques de pointe adaptées aux besoins de \
votre entreprise. Du développement web à l'infrastructure cloud, nous mettons la technologie à \
votre service.",
        cta: "Commencer",
        cta_secondary: "En Savoir Plus",
    },
    projects: ProjectsStrings {
        title: "Nos Projets",
        subtitle: "L'Excellence dans Chaque Ligne de Code",
        view_project: "Voir le Projet",
        items: &[
            ProjectItem {
                title: "Plateforme E-Commerce",
                description: "Une marketplace en ligne complète avec gestion avancée des stocks et \
intégration de paiement transparente.",
                tech: "React, Node.js, PostgreSQL",
            },
            ProjectItem {
                title: "Système de Gestion de Santé",
                description: "Transformation numérique des dossiers patients et planification des \
rendez-vous pour les établissements de santé modernes.",
                tech: "Vue.js, Express, MongoDB",
            },
            ProjectItem {
                title: "Tableau de Bord Analytique Financier",
                description: "Plateforme de visualisation et de reporting de données en temps réel pour \
les institutions financières.",
                tech: "React, Python, MySQL",
            },
            ProjectItem {
                title: "Solution IoT Ville Intelligente",
                description: "Plateforme intégrée pour gérer les infrastructures urbaines et les services \
publics via des appareils IoT.",
                tech: "Angular, Java, PostgreSQL",
            },
            ProjectItem {
                title: "Portail d'Apprentissage Éducatif",
                description: "Plateforme d'apprentissage en ligne interactive avec cours en direct, \
évaluations et suivi des progrès.",
                tech: "Next.js, GraphQL, MongoDB",
            },
            ProjectItem {
                title: "Services de Migration Cloud",
                description: "Migration réussie d'applications d'entreprise vers l'infrastructure cloud \
sans temps d'arrêt.",
                tech: "AWS, Docker, Kubernetes",
            },
        ],
    },
    about: AboutStrings {
        title: "À Propos de NOVAYTEK",
        subtitle: "Votre Partenaire Technologique de Confiance",
        mission: "Notre Mission",
        mission_text: "Autonomiser les entreprises grâce à des solutions technologiques innovantes qui \
favorisent la croissance, l'efficacité et la transformation numérique.",
        vision: "Notre Vision",
        vision_text: "Être le principal fournisseur de solutions informatiques, reconnu pour son \
excellence, son innovation et son engagement envers la réussite des clients.",
        values: "Nos Valeurs",
        value_items: &[
            ValueItem {
                title: "Innovation",
                description: "Repousser constamment les limites avec des technologies de pointe",
            },
            ValueItem {
                title: "Qualité",
                description: "Offrir l'excellence dans chaque projet que nous entreprenons",
            },
            ValueItem {
                title: "Intégrité",
                description: "Bâtir la confiance par la transparence et les pratiques éthiques",
            },
            ValueItem {
                title: "Partenariat",
                description: "Travailler aux côtés des clients pour atteindre leurs objectifs",
            },
        ],
        stats: StatsStrings {
            projects: "Projets Réalisés",
            clients: "Clients Satisfaits",
            years: "Années d'Expérience",
            team: "Membres de l'Équipe",
        },
    },
    contact: ContactStrings {
        title: "Contactez-Nous",
        subtitle: "Construisons Ensemble Quelque Chose d'Extraordinaire",
        form: ContactFormStrings {
            name: "Nom Complet",
            email: "Adresse Email",
            phone: "Numéro de Téléphone",
            subject: "Sujet",
            message: "Votre Message",
            submit: "Envoyer le Message",
            sending: "Envoi en cours...",
            success: "Message envoyé avec succès ! Nous vous répondrons bientôt.",
            error: "Échec de l'envoi du message. Veuillez réessayer.",
        },
        info: ContactInfoStrings {
            address: "Adresse",
            address_text: "123 Avenue de la Technologie, Quartier de l'Innovation",
            email: "Email",
            email_text: "contact@novaytek.com",
            phone: "Téléphone",
            phone_text: "+1 (555) 123-4567",
        },
    },
    footer: FooterStrings {
        rights: "Tous droits réservés.",
        tagline: "Construire l'avenir, une solution à la fois.",
    },
};

// ==================== Arabic Strings ====================

/// Arabic language strings (rendered right-to-left)
pub static ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    nav: NavStrings {
        home: "الرئيسية",
        projects: "المشاريع",
        about: "من نحن",
        contact: "اتصل بنا",
    },
    hero: HeroStrings {
        title: "نوفايتك",
        subtitle: "حلول تقنية المعلومات",
        tagline: "تحويل الأفكار إلى واقع رقمي",
        description: "نقدم حلول تقنية معلومات متطورة مصممة خصيصاً لتلبية احتياجات عملك. من تطوير الويب \
إلى البنية التحتية السحابية، نجعل التكنولوجيا تعمل من أجلك.",
        cta: "ابدأ الآن",
        cta_secondary: "اعرف المزيد",
    },
    projects: ProjectsStrings {
        title: "مشاريعنا",
        subtitle: "التميز في كل سطر برمجي",
        view_project: "عرض المشروع",
        items: &[
            ProjectItem {
                title: "منصة التجارة الإلكترونية",
                description: "سوق إلكتروني شامل مع إدارة متقدمة للمخزون وتكامل سلس للدفع.",
                tech: "React, Node.js, PostgreSQL",
            },
            ProjectItem {
                title: "نظام إدارة الرعاية الصحية",
                description: "التحول الرقمي لسجلات المرضى وجدولة المواعيد للمنشآت الصحية الحديثة.",
                tech: "Vue.js, Express, MongoDB",
            },
            ProjectItem {
                title: "لوحة التحليلات المالية",
                description: "منصة تصور وتقارير البيانات في الوقت الفعلي للمؤسسات المالية.",
                tech: "React, Python, MySQL",
            },
            ProjectItem {
                title: "حل إنترنت الأشياء للمدن الذكية",
                description: "منصة متكاملة لإدارة البنية التحتية الحضرية والخدمات العامة من خلال أجهزة \
إنترنت الأشياء.",
                tech: "Angular, Java, PostgreSQL",
            },
            ProjectItem {
                title: "بوابة التعلم التعليمية",
                description: "منصة تعليم إلكتروني تفاعلية مع فصول مباشرة وتقييمات وتتبع التقدم.",
                tech: "Next.js, GraphQL, MongoDB",
            },
            ProjectItem {
                title: "خدمات الانتقال السحابي",
                description: "نجحنا في ترحيل تطبيقات المؤسسات إلى البنية التحتية السحابية دون توقف.",
                tech: "AWS, Docker, Kubernetes",
            },
        ],
    },
    about: AboutStrings {
        title: "عن نوفايتك",
        subtitle: "شريكك التقني الموثوق",
        mission: "مهمتنا",
        mission_text: "تمكين الشركات من خلال حلول تقنية مبتكرة تدفع النمو والكفاءة والتحول الرقمي.",
        vision: "رؤيتنا",
        vision_text: "أن نكون مزود الحلول التقنية الرائد، المعترف به للتميز والابتكار والالتزام الثابت \
بنجاح العميل.",
        values: "قيمنا",
        value_items: &[
            ValueItem {
                title: "الابتكار",
                description: "دفع الحدود باستمرار بتقنيات متطورة",
            },
            ValueItem {
                title: "الجودة",
                description: "تقديم التميز في كل مشروع نقوم به",
            },
            ValueItem {
                title: "النزاهة",
                description: "بناء الثقة من خلال الشفافية والممارسات الأخلاقية",
            },
            ValueItem {
                title: "الشراكة",
                description: "العمل جنباً إلى جنب مع العملاء لتحقيق أهدافهم",
            },
        ],
        stats: StatsStrings {
            projects: "مشروع مكتمل",
            clients: "عميل سعيد",
            years: "سنوات الخبرة",
            team: "عضو في الفريق",
        },
    },
    contact: ContactStrings {
        title: "تواصل معنا",
        subtitle: "لنبني شيئاً رائعاً معاً",
        form: ContactFormStrings {
            name: "الاسم الكامل",
            email: "البريد الإلكتروني",
            phone: "رقم الهاتف",
            subject: "الموضوع",
            message: "رسالتك",
            submit: "إرسال الرسالة",
            sending: "جاري الإرسال...",
            success: "تم إرسال الرسالة بنجاح! سنعاود الاتصال بك قريباً.",
            error: "فشل إرسال الرسالة. يرجى المحاولة مرة أخرى.",
        },
        info: ContactInfoStrings {
            address: "العنوان",
            address_text: "123 شارع التقنية، حي الابتكار",
            email: "البريد الإلكتروني",
            email_text: "contact@novaytek.com",
            phone: "الهاتف",
            phone_text: "4567-123 (555) 1+",
        },
    },
    footer: FooterStrings {
        rights: "جميع الحقوق محفوظة.",
        tagline: "بناء المستقبل، حل واحد في كل مرة.",
    },
};
