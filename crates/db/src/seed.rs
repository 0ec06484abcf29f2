//! Hardcoded mock data for the gallery and the dashboard.
//!
//! Both views are seeded from the same six showcase projects. The gallery
//! copy carries the longer descriptions, an empty video slot and category
//! icons; the dashboard copy carries the shorter descriptions and creation
//! dates.

use chrono::NaiveDate;
use galeri_core::types::{DbId, ALL_CATEGORIES};

use crate::models::category::Category;
use crate::models::project::Project;

struct SeedProject {
    id: DbId,
    title: &'static str,
    gallery_description: &'static str,
    dashboard_description: &'static str,
    thumbnail: &'static str,
    category: &'static str,
    student_name: &'static str,
    student_class: &'static str,
    tech_stack: &'static [&'static str],
    demo_url: &'static str,
    repo_url: &'static str,
    is_featured: bool,
    created_at: (i32, u32, u32),
}

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        id: 1,
        title: "Sistem Informasi Perpustakaan Digital",
        gallery_description: "Aplikasi web untuk manajemen perpustakaan sekolah secara digital. Fitur meliputi pencarian buku, peminjaman online, dan laporan statistik perpustakaan.",
        dashboard_description: "Aplikasi web untuk manajemen perpustakaan sekolah secara digital dengan fitur peminjaman dan pengembalian buku.",
        thumbnail: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&auto=format&fit=crop&q=60",
        category: "Web",
        student_name: "Ahmad Rizky",
        student_class: "XII RPL 1",
        tech_stack: &["React", "Node.js", "PostgreSQL", "Tailwind CSS"],
        demo_url: "#",
        repo_url: "#",
        is_featured: true,
        created_at: (2024, 1, 15),
    },
    SeedProject {
        id: 2,
        title: "Aplikasi Absensi Siswa Berbasis QR Code",
        gallery_description: "Aplikasi mobile untuk absensi siswa menggunakan QR Code. Guru dapat memantau kehadiran siswa secara real-time melalui dashboard.",
        dashboard_description: "Aplikasi mobile untuk absensi siswa menggunakan QR Code.",
        thumbnail: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=600&auto=format&fit=crop&q=60",
        category: "Mobile",
        student_name: "Siti Nurhaliza",
        student_class: "XII RPL 2",
        tech_stack: &["Flutter", "Firebase", "Dart"],
        demo_url: "",
        repo_url: "#",
        is_featured: true,
        created_at: (2024, 2, 20),
    },
    SeedProject {
        id: 3,
        title: "Smart Greenhouse Monitoring System",
        gallery_description: "Sistem monitoring greenhouse berbasis IoT untuk memantau suhu, kelembaban, dan intensitas cahaya secara otomatis menggunakan sensor.",
        dashboard_description: "Sistem monitoring greenhouse berbasis IoT untuk memantau suhu, kelembaban, dan kondisi tanaman.",
        thumbnail: "https://images.unsplash.com/photo-1558618666-fcd25c85f82e?w=600&auto=format&fit=crop&q=60",
        category: "IoT",
        student_name: "Budi Santoso",
        student_class: "XII RPL 1",
        tech_stack: &["Arduino", "ESP32", "MQTT", "React"],
        demo_url: "",
        repo_url: "#",
        is_featured: false,
        created_at: (2024, 3, 10),
    },
    SeedProject {
        id: 4,
        title: "E-Kantin: Aplikasi Pemesanan Makanan",
        gallery_description: "Platform pemesanan makanan kantin sekolah secara online. Siswa dapat memesan dan membayar melalui aplikasi, mengurangi antrian di kantin.",
        dashboard_description: "Platform pemesanan makanan kantin sekolah secara online.",
        thumbnail: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600&auto=format&fit=crop&q=60",
        category: "Web",
        student_name: "Dewi Lestari",
        student_class: "XI RPL 1",
        tech_stack: &["Next.js", "Prisma", "MySQL", "Stripe"],
        demo_url: "#",
        repo_url: "#",
        is_featured: false,
        created_at: (2024, 4, 5),
    },
    SeedProject {
        id: 5,
        title: "Aplikasi Kasir Desktop untuk UMKM",
        gallery_description: "Aplikasi point-of-sale (POS) desktop untuk membantu pelaku UMKM dalam mengelola transaksi penjualan, stok barang, dan laporan keuangan.",
        dashboard_description: "Aplikasi POS desktop untuk mengelola transaksi penjualan dan stok barang.",
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&auto=format&fit=crop&q=60",
        category: "Desktop",
        student_name: "Eko Prasetyo",
        student_class: "XII RPL 2",
        tech_stack: &["Java", "JavaFX", "SQLite"],
        demo_url: "",
        repo_url: "#",
        is_featured: false,
        created_at: (2024, 5, 12),
    },
    SeedProject {
        id: 6,
        title: "Redesign UI/UX Website Sekolah",
        gallery_description: "Proyek redesign tampilan website resmi SMKN 1 Jenangan agar lebih modern, responsif, dan user-friendly dengan pendekatan mobile-first.",
        dashboard_description: "Proyek redesign tampilan website resmi SMKN 1 Jenangan Ponorogo.",
        thumbnail: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=600&auto=format&fit=crop&q=60",
        category: "UI/UX",
        student_name: "Fitri Handayani",
        student_class: "XI RPL 2",
        tech_stack: &["Figma", "Adobe XD", "HTML", "CSS"],
        demo_url: "#",
        repo_url: "",
        is_featured: true,
        created_at: (2024, 6, 18),
    },
];

/// `(name, slug, gallery icon)`; the sentinel comes first.
const CATEGORIES: &[(&str, &str, &str)] = &[
    ("Semua", ALL_CATEGORIES, "Grid3X3"),
    ("Web", "Web", "Globe"),
    ("Mobile", "Mobile", "Smartphone"),
    ("IoT", "IoT", "Cpu"),
    ("Desktop", "Desktop", "Cog"),
    ("UI/UX", "UI/UX", "Palette"),
];

impl SeedProject {
    fn to_project(&self, description: &str) -> Project {
        Project {
            id: self.id,
            title: self.title.to_string(),
            description: description.to_string(),
            thumbnail: self.thumbnail.to_string(),
            category: self.category.to_string(),
            student_name: self.student_name.to_string(),
            student_class: self.student_class.to_string(),
            tech_stack: self.tech_stack.iter().map(|t| t.to_string()).collect(),
            demo_url: self.demo_url.to_string(),
            repo_url: self.repo_url.to_string(),
            video_url: None,
            is_featured: self.is_featured,
            created_at: None,
        }
    }
}

pub fn gallery_projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|p| Project {
            video_url: Some(String::new()),
            ..p.to_project(p.gallery_description)
        })
        .collect()
}

pub fn dashboard_projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|p| {
            let (y, m, d) = p.created_at;
            Project {
                created_at: NaiveDate::from_ymd_opt(y, m, d),
                ..p.to_project(p.dashboard_description)
            }
        })
        .collect()
}

pub fn gallery_categories() -> Vec<Category> {
    categories(true)
}

pub fn dashboard_categories() -> Vec<Category> {
    categories(false)
}

fn categories(with_icons: bool) -> Vec<Category> {
    CATEGORIES
        .iter()
        .zip(1..)
        .map(|(&(name, slug, icon), id)| Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            icon: with_icons.then(|| icon.to_string()),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
