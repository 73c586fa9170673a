use super::Layout;

const SECTION_CYCLE: [Section; 4] = [
    Section::Header,
    Section::Content,
    Section::Sidebar,
    Section::Footer,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Section {
    Header,
    Content,
    Sidebar,
    Footer,
}

impl Section {
    pub(super) fn at(index: usize) -> Self {
        SECTION_CYCLE[index % SECTION_CYCLE.len()]
    }
}

pub(super) fn layout_classes(layout: Layout) -> &'static str {
    match layout {
        Layout::Grid => {
            "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 p-6 bg-white rounded-lg shadow-md"
        }
        Layout::Complex => {
            "flex flex-col lg:flex-row gap-6 p-6 bg-white rounded-lg shadow-md min-h-screen"
        }
        Layout::Vertical => {
            "flex flex-col space-y-6 p-6 bg-white rounded-lg shadow-md max-w-md mx-auto"
        }
    }
}

pub(super) fn section(section: Section, has_buttons: bool, has_images: bool) -> String {
    let mut out = String::new();
    match section {
        Section::Header => {
            out.push_str("      {/* Header Section */}\n");
            out.push_str("      <header className=\"flex items-center justify-between py-4 border-b border-gray-200\">\n");
            out.push_str("        <h1 className=\"text-2xl font-bold text-gray-900\">Your App Title</h1>\n");
            if has_buttons {
                out.push_str("        <button className=\"px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors\">\n");
                out.push_str("          Get Started\n");
                out.push_str("        </button>\n");
            }
            out.push_str("      </header>\n");
        }
        Section::Content => {
            out.push_str("      {/* Main Content */}\n");
            out.push_str("      <main className=\"flex-1 py-6\">\n");
            out.push_str("        <div className=\"space-y-4\">\n");
            out.push_str("          <h2 className=\"text-xl font-semibold text-gray-800\">Main Content</h2>\n");
            out.push_str("          <p className=\"text-gray-600 leading-relaxed\">\n");
            out.push_str("            This is the main content area of your component. You can customize this text\n");
            out.push_str("            and layout based on your specific needs.\n");
            out.push_str("          </p>\n");
            if has_images {
                out.push_str("          <div className=\"w-full h-48 bg-gray-200 rounded-lg flex items-center justify-center\">\n");
                out.push_str("            <span className=\"text-gray-500\">Image Placeholder</span>\n");
                out.push_str("          </div>\n");
            }
            if has_buttons {
                out.push_str("          <div className=\"flex gap-3\">\n");
                out.push_str("            <button className=\"px-6 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 transition-colors\">\n");
                out.push_str("              Primary Action\n");
                out.push_str("            </button>\n");
                out.push_str("            <button className=\"px-6 py-2 border border-gray-300 text-gray-700 rounded-md hover:bg-gray-50 transition-colors\">\n");
                out.push_str("              Secondary Action\n");
                out.push_str("            </button>\n");
                out.push_str("          </div>\n");
            }
            out.push_str("        </div>\n");
            out.push_str("      </main>\n");
        }
        Section::Sidebar => {
            out.push_str("      {/* Sidebar */}\n");
            out.push_str("      <aside className=\"w-full lg:w-64 bg-gray-50 rounded-lg p-4\">\n");
            out.push_str("        <h3 className=\"font-medium text-gray-900 mb-3\">Quick Links</h3>\n");
            out.push_str("        <nav className=\"space-y-2\">\n");
            for link in ["Dashboard", "Settings", "Profile"] {
                out.push_str("          <a href=\"#\" className=\"block px-3 py-2 text-sm text-gray-700 hover:bg-gray-200 rounded\">\n");
                out.push_str(&format!("            {}\n", link));
                out.push_str("          </a>\n");
            }
            out.push_str("        </nav>\n");
            out.push_str("      </aside>\n");
        }
        Section::Footer => {
            out.push_str("      {/* Footer */}\n");
            out.push_str("      <footer className=\"py-4 border-t border-gray-200 text-center\">\n");
            out.push_str("        <p className=\"text-sm text-gray-500\">\n");
            out.push_str("          © 2024 Your Company. All rights reserved.\n");
            out.push_str("        </p>\n");
            out.push_str("      </footer>\n");
        }
    }
    out
}
