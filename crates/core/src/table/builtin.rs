use super::CategoryTable;

/// Planned layout for splitting the monolithic `superpowers-agent` script.
pub fn default_table() -> CategoryTable {
    CategoryTable::default()
        .with_category(
            "core/config.js",
            [
                "getDefaultConfig",
                "readConfig",
                "writeConfig",
                "getRepositories",
                "readConfigFile",
                "writeConfigFile",
                "addRepositoryToConfig",
            ],
        )
        .with_category("core/paths.js", ["getVSCodeUserDir", "findProjectRoot"])
        .with_category(
            "core/git.js",
            ["isRepoClean", "isOnMainBranch", "checkForUpdates", "determineReinstalls"],
        )
        .with_category("core/platform-detection.js", ["detectPlatforms"])
        .with_category("utils/frontmatter.js", ["extractFrontmatter", "extractSkillContent"])
        .with_category("utils/file-ops.js", ["detectTool"])
        .with_category(
            "utils/output.js",
            ["getLocalVersion", "getRemoteVersion", "isNewerVersion", "printVersion"],
        )
        .with_category(
            "skills/finder.js",
            ["findSkillsInDir", "findSkillFile", "findMatchingSkills", "printSkill"],
        )
        .with_category(
            "skills/locator.js",
            ["locateSkill", "locateSkillByNameOrAlias", "throwAmbiguousError"],
        )
        .with_category("skills/executor.js", Vec::<String>::new())
        .with_category(
            "skills/parser.js",
            ["parseSkillName", "readSkillJson", "readSkillJsonFromPath", "findHelperInSkill"],
        )
        .with_category(
            "skills/installer.js",
            ["parseGitUrl", "getInstallLocation", "cloneRepository", "installSingleSkill"],
        )
        .with_category(
            "integrations/copilot.js",
            ["installCopilotPrompts", "installCopilotInstructions"],
        )
        .with_category("integrations/cursor.js", ["installCursorCommands", "installCursorHooks"])
        .with_category("integrations/claude.js", ["installClaudeCommands"])
        .with_category("integrations/gemini.js", ["installGeminiCommands"])
        .with_category("integrations/codex.js", ["installCodexPrompts"])
        .with_category("integrations/opencode.js", ["installOpencodeCommands"])
        .with_category(
            "commands/bootstrap.js",
            [
                "runBootstrap",
                "installAliases",
                "installUnixAliases",
                "installWindowsAliases",
                "detectShellProfile",
                "installViaRCFile",
            ],
        )
        .with_category(
            "commands/setup-skills.js",
            [
                "runSetupSkills",
                "updatePlatformFile",
                "updateAgentFile",
                "findSkillsSection",
                "findSectionEnd",
                "extractSkillsSection",
                "loadToolMappingTemplate",
                "generateToolMappings",
            ],
        )
        .with_category(
            "commands/update.js",
            ["runUpdate", "reinstallIntegration", "updateReadmeWithAutoUpdateDocs"],
        )
        .with_category(
            "commands/simple-commands.js",
            [
                "runFindSkills",
                "runExecute",
                "runUseSkill",
                "runPath",
                "runDir",
                "runGetHelpers",
                "runAdd",
                "runAddRepository",
                "runGetConfig",
                "runConfigGet",
                "runConfigSet",
                "getConfig",
            ],
        )
}
